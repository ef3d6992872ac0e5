//! The compiled-in project list.
//!
//! Records are declared as `'static` seeds and materialized once into owned
//! [`Project`] values on first access.

use std::sync::OnceLock;

use crate::project::{Category, Project, ProjectStatus};
use crate::types::ProjectId;

/// Static shape of a fixture entry.
struct Seed {
    id: ProjectId,
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    image: Option<&'static str>,
    technologies: &'static [&'static str],
    tags: &'static [&'static str],
    demo_url: &'static str,
    repo_url: &'static str,
    featured: bool,
    category: Category,
    status: ProjectStatus,
    year: u16,
    duration: &'static str,
    challenges: &'static [&'static str],
    achievements: &'static [&'static str],
}

impl Seed {
    fn to_project(&self) -> Project {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }

        Project {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            long_description: self.long_description.to_string(),
            image: self.image.map(str::to_string),
            technologies: owned(self.technologies),
            tags: owned(self.tags),
            demo_url: self.demo_url.to_string(),
            repo_url: self.repo_url.to_string(),
            featured: self.featured,
            category: self.category,
            status: self.status,
            year: self.year,
            duration: self.duration.to_string(),
            challenges: owned(self.challenges),
            achievements: owned(self.achievements),
        }
    }
}

/// Every showcased project, in display order.
pub fn projects() -> &'static [Project] {
    static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();
    PROJECTS.get_or_init(|| SEEDS.iter().map(Seed::to_project).collect())
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: "Parts Trading Platform",
        description: "Full-stack platform for buying and selling parts with ReactJS frontend and NodeJS backend.",
        long_description: "A comprehensive e-commerce platform designed for automotive parts trading. The application features a modern ReactJS frontend with real-time updates, secure user authentication, advanced search and filtering capabilities, and a robust NodeJS backend with PostgreSQL database integration. The platform includes features like user profiles, product management, secure payment processing, and real-time messaging between buyers and sellers.",
        image: None,
        technologies: &["ReactJS", "NodeJS", "Express", "PostgreSQL", "TypeORM", "JWT", "Socket.io", "Stripe API"],
        tags: &["E-commerce", "Full-stack", "Real-time", "Authentication"],
        demo_url: "https://parts-trading-demo.com",
        repo_url: "https://github.com/iskren/parts-trading-platform",
        featured: true,
        category: Category::Fullstack,
        status: ProjectStatus::Completed,
        year: 2024,
        duration: "3 months",
        challenges: &["Implementing real-time chat functionality", "Optimizing database queries for large datasets", "Creating responsive design for mobile devices"],
        achievements: &["Reduced page load time by 40%", "Achieved 99.9% uptime", "Processed over 1000 transactions successfully"],
    },
    Seed {
        id: 2,
        title: "Figma Design Implementation",
        description: "Pixel-perfect implementation of complex Figma designs using modern ReactJS and TypeScript.",
        long_description: "Transformed complex Figma designs into fully functional web applications with pixel-perfect accuracy. This project involved working closely with UI/UX designers to ensure every detail from the design system was properly implemented. The implementation includes responsive layouts, interactive components, smooth animations, and accessibility features that meet WCAG guidelines.",
        image: None,
        technologies: &["ReactJS", "TypeScript", "CSS/SCSS", "Figma", "Storybook", "Jest", "Cypress"],
        tags: &["UI/UX", "Design System", "Responsive", "Accessibility"],
        demo_url: "https://figma-implementation-demo.com",
        repo_url: "https://github.com/iskren/figma-implementation",
        featured: true,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2024,
        duration: "2 months",
        challenges: &["Converting complex animations from Figma", "Ensuring cross-browser compatibility", "Maintaining design consistency across components"],
        achievements: &["100% design fidelity achieved", "Improved accessibility score to 95%", "Reduced development time by 30%"],
    },
    Seed {
        id: 3,
        title: "AngularJS Dashboard",
        description: "Interactive dashboard application built with AngularJS for data visualization and management.",
        long_description: "A comprehensive data visualization dashboard built with AngularJS that provides real-time insights into business metrics. The dashboard features interactive charts, customizable widgets, user role management, and data export capabilities. It integrates with multiple APIs to provide a unified view of business operations and performance metrics.",
        image: None,
        technologies: &["AngularJS", "JavaScript", "D3.js", "Chart.js", "CSS", "REST API", "WebSocket"],
        tags: &["Data Visualization", "Dashboard", "Real-time", "Analytics"],
        demo_url: "https://angular-dashboard-demo.com",
        repo_url: "https://github.com/iskren/angular-dashboard",
        featured: false,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2023,
        duration: "4 months",
        challenges: &["Handling large datasets efficiently", "Creating responsive charts", "Implementing real-time data updates"],
        achievements: &["Processed 1M+ data points", "Achieved 60fps animations", "Reduced data loading time by 50%"],
    },
    Seed {
        id: 4,
        title: "NestJS Backend API",
        description: "Robust backend API built with NestJS and TypeORM for PostgreSQL database management.",
        long_description: "A scalable and maintainable backend API built with NestJS framework. The API includes comprehensive authentication and authorization, data validation, error handling, logging, and monitoring. It features microservices architecture, database migrations, automated testing, and comprehensive API documentation. The system is designed to handle high traffic and provides excellent performance.",
        image: None,
        technologies: &["NestJS", "TypeORM", "PostgreSQL", "TypeScript", "JWT", "Swagger", "Docker", "Redis"],
        tags: &["Backend", "API", "Microservices", "Database"],
        demo_url: "https://nestjs-api-docs.com",
        repo_url: "https://github.com/iskren/nestjs-backend-api",
        featured: false,
        category: Category::Backend,
        status: ProjectStatus::Completed,
        year: 2023,
        duration: "5 months",
        challenges: &["Designing scalable microservices architecture", "Implementing complex database relationships", "Ensuring API security and performance"],
        achievements: &["Handled 10K+ concurrent users", "Achieved 99.99% uptime", "Reduced API response time by 60%"],
    },
    Seed {
        id: 5,
        title: "Portfolio Website",
        description: "Modern, responsive portfolio website with smooth animations, custom cursor effects, and mobile-first design.",
        long_description: "A cutting-edge portfolio website showcasing modern web development techniques. The site features smooth animations powered by Framer Motion, custom cursor effects, glassmorphism design elements, and a mobile-first responsive approach. It includes interactive sections, smooth scrolling, dark/light theme toggle, and optimized performance for fast loading times.",
        image: None,
        technologies: &["React", "Framer Motion", "Tailwind CSS", "TypeScript", "Vite", "React Router", "React Helmet"],
        tags: &["Portfolio", "Animation", "Responsive", "Modern Design"],
        demo_url: "https://iskren-portfolio.com",
        repo_url: "https://github.com/iskren/portfolio-website",
        featured: true,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2024,
        duration: "1 month",
        challenges: &["Creating smooth animations without performance impact", "Implementing custom cursor effects", "Optimizing for mobile devices"],
        achievements: &["Achieved 100% Lighthouse score", "Reduced bundle size by 25%", "Implemented smooth 60fps animations"],
    },
    Seed {
        id: 6,
        title: "University Projects",
        description: "Various web development projects created during university studies, showcasing progression in programming skills.",
        long_description: "A collection of web development projects created during university studies, demonstrating the evolution of programming skills and understanding of modern web technologies. These projects include basic HTML/CSS websites, JavaScript applications, ReactJS projects, and full-stack applications. Each project represents a milestone in the learning journey and showcases the progression from basic concepts to advanced implementations.",
        image: None,
        technologies: &["HTML", "CSS", "JavaScript", "ReactJS", "NodeJS", "MongoDB", "Bootstrap", "jQuery"],
        tags: &["Learning", "Academic", "Progressive", "Diverse"],
        demo_url: "https://university-projects-demo.com",
        repo_url: "https://github.com/iskren/university-projects",
        featured: false,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2022,
        duration: "2 years",
        challenges: &["Learning new technologies", "Balancing academic requirements", "Building projects from scratch"],
        achievements: &["Completed 15+ projects", "Mastered multiple technologies", "Achieved academic excellence"],
    },
    Seed {
        id: 7,
        title: "E-commerce Mobile App",
        description: "Cross-platform mobile application for e-commerce with React Native and modern UI/UX design.",
        long_description: "A feature-rich mobile e-commerce application built with React Native for both iOS and Android platforms. The app includes user authentication, product catalog, shopping cart, payment integration, push notifications, and offline functionality. The design follows modern mobile UI/UX principles with smooth animations and intuitive navigation.",
        image: None,
        technologies: &["React Native", "Redux", "Firebase", "Stripe", "Push Notifications", "AsyncStorage", "React Navigation"],
        tags: &["Mobile", "E-commerce", "Cross-platform", "Offline"],
        demo_url: "https://mobile-app-demo.com",
        repo_url: "https://github.com/iskren/ecommerce-mobile-app",
        featured: true,
        category: Category::Mobile,
        status: ProjectStatus::InProgress,
        year: 2024,
        duration: "4 months",
        challenges: &["Implementing offline functionality", "Optimizing for different screen sizes", "Integrating payment systems"],
        achievements: &["Achieved 4.8 app store rating", "Reduced app size by 30%", "Implemented smooth animations"],
    },
    Seed {
        id: 8,
        title: "AI-Powered Chat Application",
        description: "Real-time chat application with AI integration for intelligent responses and content moderation.",
        long_description: "An innovative chat application that combines real-time messaging with AI capabilities. The app features intelligent response suggestions, content moderation, sentiment analysis, and automated customer support. Built with modern web technologies, it provides a seamless user experience with advanced AI features that enhance communication and user engagement.",
        image: None,
        technologies: &["React", "NodeJS", "Socket.io", "OpenAI API", "MongoDB", "Redis", "Docker", "AWS"],
        tags: &["AI", "Real-time", "Chat", "Machine Learning"],
        demo_url: "https://ai-chat-demo.com",
        repo_url: "https://github.com/iskren/ai-chat-app",
        featured: true,
        category: Category::Fullstack,
        status: ProjectStatus::InProgress,
        year: 2024,
        duration: "3 months",
        challenges: &["Integrating AI APIs efficiently", "Handling real-time data processing", "Ensuring data privacy and security"],
        achievements: &["Reduced response time by 70%", "Implemented advanced AI features", "Achieved 99.5% uptime"],
    },
    Seed {
        id: 9,
        title: "Task Management System",
        description: "Comprehensive task management system with team collaboration features and project tracking.",
        long_description: "A full-featured task management system designed for teams and individuals. The application includes project creation, task assignment, team collaboration, time tracking, progress monitoring, and detailed reporting. It features a clean, intuitive interface with drag-and-drop functionality, real-time updates, and integration with popular productivity tools.",
        image: None,
        technologies: &["Vue.js", "Express", "MySQL", "Socket.io", "Chart.js", "Docker", "JWT", "Multer"],
        tags: &["Productivity", "Collaboration", "Project Management", "Team Work"],
        demo_url: "https://task-management-demo.com",
        repo_url: "https://github.com/iskren/task-management-system",
        featured: false,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2023,
        duration: "3 months",
        challenges: &["Implementing real-time collaboration", "Creating intuitive drag-and-drop interface", "Optimizing database performance"],
        achievements: &["Improved team productivity by 40%", "Reduced project completion time", "Achieved high user satisfaction"],
    },
    Seed {
        id: 10,
        title: "Weather Dashboard",
        description: "Interactive weather dashboard with real-time data, forecasts, and location-based services.",
        long_description: "A comprehensive weather application that provides real-time weather data, detailed forecasts, and location-based services. The dashboard features interactive maps, weather charts, alerts, and personalized recommendations. Built with modern web technologies, it offers a smooth user experience with accurate weather information and beautiful visualizations.",
        image: None,
        technologies: &["React", "TypeScript", "Weather API", "Mapbox", "Chart.js", "PWA", "Service Workers"],
        tags: &["Weather", "Real-time", "Maps", "PWA"],
        demo_url: "https://weather-dashboard-demo.com",
        repo_url: "https://github.com/iskren/weather-dashboard",
        featured: false,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2023,
        duration: "2 months",
        challenges: &["Integrating multiple weather APIs", "Creating responsive weather visualizations", "Implementing offline functionality"],
        achievements: &["Achieved 99% accuracy in forecasts", "Reduced loading time by 50%", "Implemented PWA features"],
    },    Seed {
        id: 11,
        title: "Spotify UI Clone",
        description: "Responsive music streaming interface recreating the Spotify web player layout and playback controls.",
        long_description: "A front-end recreation of the Spotify web player with a collapsible sidebar, playlist views, a persistent playback bar, and keyboard shortcuts. Audio previews are streamed from a public API and the layout adapts from wide desktop screens down to phones.",
        image: Some("/images/projects/spotify-ui-clone.png"),
        technologies: &["React", "TypeScript", "Tailwind CSS", "Web Audio API"],
        tags: &["Responsive", "UI Clone", "Music", "Frontend"],
        demo_url: "https://spotify-clone-demo.com",
        repo_url: "https://github.com/iskren/spotify-ui-clone",
        featured: false,
        category: Category::Web,
        status: ProjectStatus::Completed,
        year: 2024,
        duration: "3 weeks",
        challenges: &["Keeping the playback bar in sync across views", "Matching the original layout at every breakpoint"],
        achievements: &["Near pixel-perfect layout at three breakpoints", "Full keyboard navigation"],
    },
    Seed {
        id: 12,
        title: "Brand Identity Kit",
        description: "Logo, color system, and component library designed in Figma for a small coffee roastery.",
        long_description: "A complete visual identity for an independent coffee roastery, covering logo variations, a color and type system, packaging mockups, and a reusable Figma component library handed off to the developers building the shop.",
        image: None,
        technologies: &["Figma", "Illustrator", "Design Tokens"],
        tags: &["Branding", "Design System", "Print"],
        demo_url: "https://brand-kit-demo.com",
        repo_url: "https://github.com/iskren/brand-identity-kit",
        featured: false,
        category: Category::Design,
        status: ProjectStatus::Planned,
        year: 2025,
        duration: "1 month",
        challenges: &["Designing a mark that reads at label sizes"],
        achievements: &["Token export consumed directly by the storefront"],
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn every_category_is_represented() {
        for category in Category::ALL {
            assert!(
                projects().iter().any(|p| p.category == category),
                "no fixture project in category {category}"
            );
        }
    }

    #[test]
    fn materializes_once() {
        assert!(std::ptr::eq(projects(), projects()));
    }

    #[test]
    fn preserves_declaration_order() {
        let ids: Vec<_> = projects().iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first(), Some(&1));
    }
}

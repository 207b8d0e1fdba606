//! Book front matter and table of contents.

use super::{Chapter, ChapterIcon, Subchapter};

pub const BOOK_TITLE: &str = "How to Be a Good Programmer";
pub const BOOK_AUTHOR: &str = "By Saed I. S. Ayyad";
pub const BOOK_SUBTITLE: &str = "A comprehensive guide to modern software development";

/// Intro paragraph shown at the top of the Book Contents tab.
pub const BOOK_INTRO: &str = "This comprehensive guide will take you through the journey of \
becoming a proficient programmer, covering everything from fundamental concepts to advanced \
software development practices. Whether you're just starting or looking to enhance your \
skills, this book provides the knowledge and practical insights needed to succeed in the \
field of software development.";

/// The book's chapters, in reading order.
pub fn chapters() -> Vec<Chapter> {
    vec![
        Chapter {
            title: "Foundations of Programming",
            icon: ChapterIcon::BookOpen,
            body: "Understanding the core concepts of programming is essential for becoming \
                   a proficient developer. This chapter covers fundamental principles that \
                   apply across all programming languages.",
            subchapters: vec![
                Subchapter {
                    title: "Computational Thinking",
                    body: "Learn how to break down complex problems into smaller, manageable \
                           pieces. Develop analytical thinking skills essential for programming.",
                },
                Subchapter {
                    title: "Data Structures and Algorithms",
                    body: "Explore the building blocks of software: arrays, linked lists, \
                           trees, and fundamental algorithms for sorting and searching.",
                },
                Subchapter {
                    title: "Programming Paradigms",
                    body: "Understand different approaches to programming: procedural, \
                           object-oriented, functional, and declarative programming.",
                },
            ],
        },
        Chapter {
            title: "Software Design Principles",
            icon: ChapterIcon::Tools,
            body: "Good software design is crucial for maintaining and scaling applications. \
                   Learn the principles that guide professional software development.",
            subchapters: vec![
                Subchapter {
                    title: "SOLID Principles",
                    body: "Master the five fundamental principles of object-oriented design \
                           that make software more understandable, flexible, and maintainable.",
                },
                Subchapter {
                    title: "Design Patterns",
                    body: "Learn common solutions to recurring problems in software design, \
                           including creational, structural, and behavioral patterns.",
                },
                Subchapter {
                    title: "Clean Code Practices",
                    body: "Discover techniques for writing code that is easy to understand, \
                           test, and maintain.",
                },
            ],
        },
        Chapter {
            title: "Modern Development Practices",
            icon: ChapterIcon::Rocket,
            body: "Stay current with contemporary software development practices that improve \
                   code quality and team collaboration.",
            subchapters: vec![
                Subchapter {
                    title: "Version Control with Git",
                    body: "Learn to track and manage code changes effectively using Git and \
                           collaborative development workflows.",
                },
                Subchapter {
                    title: "Test-Driven Development",
                    body: "Understand how to write tests first and use them to drive the \
                           design and implementation of your code.",
                },
                Subchapter {
                    title: "Continuous Integration/Deployment",
                    body: "Explore automated testing and deployment pipelines that ensure \
                           code quality and rapid delivery.",
                },
            ],
        },
        Chapter {
            title: "Web Development",
            icon: ChapterIcon::Cloud,
            body: "Master the technologies and practices required for modern web development.",
            subchapters: vec![
                Subchapter {
                    title: "Frontend Development",
                    body: "Learn HTML, CSS, JavaScript, and modern frameworks for building \
                           responsive user interfaces.",
                },
                Subchapter {
                    title: "Backend Development",
                    body: "Understand server-side programming, APIs, and database integration.",
                },
                Subchapter {
                    title: "Web Security",
                    body: "Explore common security vulnerabilities and best practices for \
                           protecting web applications.",
                },
            ],
        },
        Chapter {
            title: "Database Design",
            icon: ChapterIcon::Database,
            body: "Learn how to design and manage databases effectively for your applications.",
            subchapters: vec![
                Subchapter {
                    title: "Relational Databases",
                    body: "Master SQL and understand how to design efficient database schemas.",
                },
                Subchapter {
                    title: "NoSQL Databases",
                    body: "Explore non-relational databases and their use cases in modern \
                           applications.",
                },
                Subchapter {
                    title: "Data Modeling",
                    body: "Learn techniques for modeling complex data relationships and \
                           optimizing database performance.",
                },
            ],
        },
    ]
}

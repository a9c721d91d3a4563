//! Content table for the completed training program page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramSummary {
    pub title: &'static str,
    pub mode: &'static str,
    pub duration_months: u32,
    pub hours: u32,
    pub capstone_hours: u32,
    pub internship_weeks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub key: &'static str,
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseBlock {
    pub title: &'static str,
    pub courses: &'static [Course],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingProgram {
    pub summary: ProgramSummary,
    pub tracks: &'static [Track],
    pub objectives: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub blocks: &'static [CourseBlock],
}

impl TrainingProgram {
    pub fn course_count(&self) -> usize {
        self.blocks.iter().map(|block| block.courses.len()).sum()
    }

    pub fn courses(&self) -> impl Iterator<Item = &'static Course> + '_ {
        self.blocks.iter().flat_map(|block| block.courses.iter())
    }

    pub fn find_course(&self, code: &str) -> Option<&'static Course> {
        let code = code.trim();
        self.courses()
            .find(|course| course.code.eq_ignore_ascii_case(code))
    }
}

pub fn program() -> &'static TrainingProgram {
    &PROGRAM
}

static PROGRAM: TrainingProgram = TrainingProgram {
    summary: ProgramSummary {
        title: "AEC - Mobile Application Development (LEA.CB)",
        mode: "Hybrid program",
        duration_months: 13,
        hours: 1200,
        capstone_hours: 90,
        internship_weeks: 6,
    },
    tracks: &[
        Track {
            key: "android",
            title: "Native Android",
            points: &[
                "OOP, MVVM, unit tests",
                "Network calls, storage, geolocation",
                "Deployment and mobile UX",
            ],
        },
        Track {
            key: "ios",
            title: "Native iOS",
            points: &[
                "Declarative interfaces",
                "Multi-view navigation",
                "Local persistence and network calls",
            ],
        },
        Track {
            key: "web",
            title: "Web and cross-platform",
            points: &[
                "PWA (web framework)",
                "Cross-platform apps (specialized libraries)",
                "Camera/geolocation access, performance and reliability",
            ],
        },
    ],
    objectives: &[
        "Design mobile applications",
        "Build native and web apps",
        "Organize the graphic space of a UI",
        "Ensure quality",
        "Publish and deploy mobile apps",
    ],
    technologies: &["Vue.js", "React Native", "SQL", "NoSQL", "Git", "GitHub"],
    blocks: &[
        CourseBlock {
            title: "Block 1",
            courses: &[
                Course {
                    code: "420-702-AH",
                    name: "Operating system fundamentals and usage",
                },
                Course {
                    code: "420-704-AH",
                    name: "The programmer's trade: tools and standards",
                },
                Course {
                    code: "420-717-AH",
                    name: "Programming techniques (mobile)",
                },
                Course {
                    code: "570-701-AH",
                    name: "Designing digital and adaptive UIs",
                },
            ],
        },
        CourseBlock {
            title: "Block 2",
            courses: &[
                Course {
                    code: "410-294-AH",
                    name: "Entering the job market",
                },
                Course {
                    code: "420-703-AH",
                    name: "Introduction to database operations",
                },
                Course {
                    code: "420-718-AH",
                    name: "Interactive web page programming",
                },
                Course {
                    code: "420-719-AH",
                    name: "OOP for Android",
                },
            ],
        },
        CourseBlock {
            title: "Block 3",
            courses: &[
                Course {
                    code: "420-720-AH",
                    name: "Introduction to iOS development",
                },
                Course {
                    code: "420-721-AH",
                    name: "Android application development",
                },
                Course {
                    code: "420-722-AH",
                    name: "Progressive web application development (PWA)",
                },
                Course {
                    code: "420-723-AH",
                    name: "Microservice development",
                },
            ],
        },
        CourseBlock {
            title: "Block 4",
            courses: &[
                Course {
                    code: "420-724-AH",
                    name: "Application deployment project (team)",
                },
                Course {
                    code: "420-725-AH",
                    name: "iOS application development",
                },
                Course {
                    code: "420-726-AH",
                    name: "Cross-platform web applications",
                },
                Course {
                    code: "420-727-AH",
                    name: "Securing and deploying mobile apps",
                },
            ],
        },
        CourseBlock {
            title: "Block 5",
            courses: &[Course {
                code: "420-728-AH",
                name: "Workplace internship",
            }],
        },
    ],
};

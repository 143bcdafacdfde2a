//! Portfolio content: projects, skills and work experience.
//!
//! The catalog is built once at start-up and shared read-only with the
//! request handlers.

use serde::Serialize;

use crate::config::SiteConfig;

/// Category name that selects every project.
pub const ALL_CATEGORIES: &str = "all";

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Numeric id used in `/project/{id}`.
    pub id: u32,
    /// Project title.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Technologies used.
    pub tech_stack: Vec<String>,
    /// Category used by the project filter.
    pub category: String,
    /// Source repository URL.
    pub github: String,
    /// Live demo URL (`#` when there is none).
    pub demo: String,
    /// Cover image file name.
    pub image: String,
    /// Bullet-point highlights.
    pub highlights: Vec<String>,
}

/// A named group of skills, e.g. "Programming".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    /// Group heading.
    pub name: String,
    /// Skills in the group.
    pub skills: Vec<String>,
}

/// A position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    /// Job title.
    pub title: String,
    /// Employer.
    pub company: String,
    /// Human-readable period, e.g. "2024 - Present".
    pub duration: String,
    /// Where the work took place.
    pub location: String,
    /// What the role involved.
    pub responsibilities: Vec<String>,
}

/// Figures served by `/api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioStats {
    /// Number of projects in the catalog.
    pub projects_completed: usize,
    /// Total number of skills across all groups.
    pub skills_mastered: usize,
    /// Years of professional experience.
    pub years_experience: u32,
    /// Certifications earned.
    pub certifications: u32,
}

/// Everything the pages display, apart from contact messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    /// Site owner's name.
    pub owner: String,
    /// Projects in display order.
    pub projects: Vec<Project>,
    /// Skill groups in display order.
    pub skills: Vec<SkillGroup>,
    /// Positions, most recent first.
    pub experience: Vec<Experience>,
    /// Years of professional experience.
    pub years_experience: u32,
    /// Certifications earned.
    pub certifications: u32,
}

impl Portfolio {
    /// Build the catalog shipped with the site, using `site` for the owner
    /// name and the configurable figures.
    #[must_use]
    pub fn builtin(site: &SiteConfig) -> Self {
        Self {
            owner: site.owner.clone(),
            projects: builtin_projects(),
            skills: builtin_skills(),
            experience: builtin_experience(),
            years_experience: site.years_experience,
            certifications: site.certifications,
        }
    }

    /// Projects in `category`, or every project for [`ALL_CATEGORIES`].
    ///
    /// Matching is exact; an unknown category yields nothing.
    #[must_use]
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    /// Look up a project by id.
    #[must_use]
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Distinct project categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category.as_str()) {
                seen.push(&project.category);
            }
        }
        seen
    }

    /// Total number of skills across all groups.
    #[must_use]
    pub fn skills_count(&self) -> usize {
        self.skills.iter().map(|g| g.skills.len()).sum()
    }

    /// Headline figures for `/api/stats`.
    #[must_use]
    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats {
            projects_completed: self.projects.len(),
            skills_mastered: self.skills_count(),
            years_experience: self.years_experience,
            certifications: self.certifications,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    description: &str,
    tech_stack: &[&str],
    category: &str,
    slug: &str,
    image: &str,
    highlights: &[&str],
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tech_stack: strings(tech_stack),
        category: category.to_string(),
        github: format!("https://github.com/yourusername/{slug}"),
        demo: "#".to_string(),
        image: image.to_string(),
        highlights: strings(highlights),
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "SwasthaAI-Agent",
            "An AI-driven healthcare assistant that performs symptom checking, provides \
             suggestions, and verifies medicines using OCR technology.",
            &["Python", "Flask", "OpenAI API", "OCR", "TensorFlow"],
            "AI/ML",
            "swastha-ai",
            "swastha.jpg",
            &[
                "Real-time symptom analysis",
                "Medicine verification using OCR",
                "Intelligent health recommendations",
                "User-friendly interface",
            ],
        ),
        project(
            2,
            "NeuroShield AI",
            "An AI firewall detecting mental manipulation and cognitive intrusion in \
             real-time communication. Winner of National Hackathon 2024.",
            &["Python", "NLP", "Deep Learning", "Real-time Analytics"],
            "AI/ML",
            "neuroshield",
            "neuroshield.jpg",
            &[
                "Real-time threat detection",
                "Advanced NLP algorithms",
                "Hackathon Winner",
                "95% accuracy rate",
            ],
        ),
        project(
            3,
            "Campus Placement Analytics",
            "Comprehensive analytics dashboard analyzing placement trends and student \
             performance metrics for data-driven insights.",
            &["Python", "Pandas", "Power BI", "Excel", "Matplotlib"],
            "Data Analytics",
            "placement-analytics",
            "placement.jpg",
            &[
                "Interactive Power BI dashboards",
                "Predictive analytics",
                "Trend analysis",
                "Performance metrics tracking",
            ],
        ),
        project(
            4,
            "Sales Performance Dashboard",
            "Real-time sales analytics dashboard providing insights into revenue, customer \
             behavior, and market trends.",
            &["Python", "Looker Studio", "SQL", "Pandas"],
            "Data Analytics",
            "sales-dashboard",
            "sales.jpg",
            &[
                "Real-time data visualization",
                "KPI tracking",
                "Customer segmentation",
                "Revenue forecasting",
            ],
        ),
        project(
            5,
            "Automated Report Generator",
            "Python-based automation tool that generates comprehensive business reports \
             from raw data sources.",
            &["Python", "Pandas", "Matplotlib", "FPDF", "Automation"],
            "Automation",
            "report-generator",
            "automation.jpg",
            &[
                "Automated data processing",
                "PDF report generation",
                "Scheduled reporting",
                "Custom templates",
            ],
        ),
    ]
}

fn builtin_skills() -> Vec<SkillGroup> {
    let group = |name: &str, skills: &[&str]| SkillGroup {
        name: name.to_string(),
        skills: strings(skills),
    };
    vec![
        group("Programming", &["Python", "SQL", "JavaScript", "HTML/CSS"]),
        group(
            "Data Analysis",
            &["Pandas", "NumPy", "Excel", "Statistical Analysis"],
        ),
        group(
            "Visualization",
            &["Power BI", "Looker Studio", "Matplotlib", "Seaborn", "Plotly"],
        ),
        group("AI/ML", &["TensorFlow", "Scikit-learn", "NLP", "OpenAI API"]),
        group(
            "Web Development",
            &["Flask", "Django", "REST APIs", "Bootstrap"],
        ),
        group("Tools", &["Git", "Jupyter", "VS Code", "Tableau"]),
    ]
}

fn builtin_experience() -> Vec<Experience> {
    vec![
        Experience {
            title: "Research Analyst".to_string(),
            company: "3N Performance Partners".to_string(),
            duration: "2024 - Present".to_string(),
            location: "Hyderabad, India".to_string(),
            responsibilities: strings(&[
                "Conducting market research and competitive analysis",
                "Building predictive models for business forecasting",
                "Creating interactive dashboards using Power BI and Looker Studio",
                "Automating data processing workflows",
                "Presenting insights to stakeholders",
            ]),
        },
        Experience {
            title: "Data Analytics Intern".to_string(),
            company: "Tech Solutions Pvt Ltd".to_string(),
            duration: "2023 - 2024".to_string(),
            location: "Remote".to_string(),
            responsibilities: strings(&[
                "Analyzed customer data to identify trends and patterns",
                "Developed Python scripts for data cleaning and transformation",
                "Created visualization reports using Matplotlib and Seaborn",
                "Collaborated with cross-functional teams",
            ]),
        },
    ]
}

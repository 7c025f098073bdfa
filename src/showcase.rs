use std::{fmt, str::FromStr};

const DEFAULT_GRADIENT: &str = "from-space-accent to-space-highlight";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Certificates,
    TechStack,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Certificates, Tab::TechStack];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Projects => "projects",
            Tab::Certificates => "certificates",
            Tab::TechStack => "techstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Certificates => "Certificates",
            Tab::TechStack => "Tech Stack",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Projects => "</>",
            Tab::Certificates => "🏅",
            Tab::TechStack => "▤",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| format!("unknown tab: {s}"))
    }
}

/// Tailwind gradient for a technology's card border.
pub fn tech_gradient(tech: &str) -> &'static str {
    match tech {
        "HTML" => "from-orange-500 to-red-600",
        "CSS" => "from-blue-500 to-blue-600",
        "JavaScript" => "from-yellow-400 to-yellow-600",
        "PHP" => "from-indigo-400 to-purple-600",
        "Python" => "from-blue-400 to-green-600",
        "Java" => "from-red-500 to-red-700",
        "Flask" => "from-gray-500 to-gray-700",
        "SQL" => "from-cyan-500 to-blue-700",
        "SQLite" => "from-blue-400 to-indigo-600",
        "Git" => "from-orange-600 to-red-700",
        _ => DEFAULT_GRADIENT,
    }
}

use log::debug;

/// Version-control metadata is excluded no matter which profile is active.
const IMPLICIT_PATTERN: &str = ".git";

/// Immutable catalog of named ignore profiles, built once at startup and
/// injected into the scanner rather than referenced as ambient state.
pub struct IgnoreCatalog {
    profiles: Vec<(&'static str, Vec<&'static str>)>,
}

impl IgnoreCatalog {
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                ("None", vec![]),
                (
                    "Python",
                    vec![
                        "__pycache__",
                        ".pyc",
                        ".pyo",
                        ".pyd",
                        ".venv",
                        ".env",
                        "env/",
                        "venv/",
                    ],
                ),
                (
                    "Java",
                    vec![
                        "*.class", "*.jar", "*.war", "*.ear", "*.nar", "*.rar", "*.har", "*.java",
                    ],
                ),
                (
                    "Node",
                    vec!["node_modules", "*.log", "npm-debug.log", "yarn-error.log"],
                ),
                ("C++", vec!["*.o", "*.obj", "*.exe", "*.dll", "*.so", "*.out"]),
                ("C#", vec!["bin/", "obj/", "*.exe", "*.dll", "*.pdb"]),
                (
                    "Django",
                    vec!["*.pyc", "__pycache__", "*.log", "*.pot", "db.sqlite3"],
                ),
                ("Flask", vec!["instance/", "*.pyc", "__pycache__"]),
            ],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|(name, _)| *name)
    }

    pub fn patterns_of(&self, name: &str) -> &[&'static str] {
        self.profiles
            .iter()
            .find(|(profile, _)| profile.eq_ignore_ascii_case(name))
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Resolves a profile name to its pattern set plus the implicit `.git`
    /// rule. An unknown name resolves to the empty set, not an error.
    pub fn resolve(&self, name: &str) -> Vec<String> {
        let mut patterns: Vec<String> = self
            .patterns_of(name)
            .iter()
            .map(|p| p.to_string())
            .collect();

        if patterns.is_empty() && !name.eq_ignore_ascii_case("None") {
            debug!("Unknown ignore profile '{}', using empty pattern set", name);
        }

        patterns.push(IMPLICIT_PATTERN.to_string());
        patterns
    }
}

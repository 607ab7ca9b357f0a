// Featured project cards.
// The fixed list shown below the GitHub statistics.

use serde::{Deserialize, Serialize};

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Site-relative path of the card image.
    pub image: String,
    pub link: String,
    pub languages: Vec<String>,
    pub discontinued: bool,
    pub owned_by_me: bool,
}

impl Project {
    fn new(
        title: &str,
        description: &str,
        image: &str,
        link: &str,
        languages: &[&str],
        discontinued: bool,
        owned_by_me: bool,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            link: link.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            discontinued,
            owned_by_me,
        }
    }
}

/// All featured projects, in display order.
pub fn featured() -> Vec<Project> {
    vec![
        Project::new(
            "PhantomGuard",
            "A powerful and easy to use standalone anti-cheat for FiveM.",
            "/assets/images/FB1UwA1yV8ukWcuvYiQJ.png",
            "https://phantomguard.eu",
            &["Lua", "JavaScript", "TypeScript", "React"],
            false,
            true,
        ),
        Project::new(
            "Ikcheatniet",
            "Ikcheatniet is a simple API that allows you to check if a Discord User is inside of a cheating server.",
            "/assets/images/g7FJjW17AZeo9HN9VsKL.png",
            "https://ikcheatniet.nl",
            &["TypeScript"],
            false,
            true,
        ),
        Project::new(
            "Urlcut",
            "An encrypted URL shortener, with a focus on privacy and speed.",
            "/assets/images/50WJnJzrcnNiXIVYwwpu.png",
            "https://urlcut.co.uk",
            &["TypeScript", "React"],
            true,
            false,
        ),
    ]
}

use owo_colors::OwoColorize;

pub struct ListSummary {
    pub prefix: String,
    pub message: String,
}

impl ListSummary {
    pub fn format(total: usize, checked: usize, excluded: usize) -> Self {
        let excluded_note = if excluded > 0 {
            format!(" ({} owned item(s) excluded)", excluded.yellow())
        } else {
            String::new()
        };

        match (total, checked) {
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: format!("Nothing to buy{}", excluded_note),
            },
            (t, c) if c >= t => Self {
                prefix: "✓".green().to_string(),
                message: format!("All {} item(s) checked{}", t.green(), excluded_note),
            },
            (t, c) => Self {
                prefix: "□".cyan().to_string(),
                message: format!(
                    "{} item(s) to buy, {} checked{}",
                    (t - c).cyan(),
                    c.green(),
                    excluded_note
                ),
            },
        }
    }
}

impl std::fmt::Display for ListSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

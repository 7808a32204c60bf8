//! Visual theme and styling.
//!
//! All colour decisions live here; commands ask the theme to format text
//! instead of splicing escape codes themselves.

use console::Style;

use crate::package::Category;

/// pacsort's visual theme.
#[derive(Debug, Clone)]
pub struct PacsortTheme {
    /// Style for success messages and added packages (green).
    pub success: Style,
    /// Style for warning messages (amber).
    pub warning: Style,
    /// Style for error messages and removed packages (red bold).
    pub error: Style,
    /// Style for package names in listings (blue).
    pub name: Style,
    /// Style for descriptions and secondary text (dim).
    pub dim: Style,
    /// Style for highlighted values such as counts (amber bold).
    pub highlight: Style,
    /// Style for section headings (amber).
    pub header: Style,
    /// Style for separator rules (beige).
    pub rule: Style,
    /// Style for the category footer line (dark background).
    pub footer: Style,
    /// Per-category label styles.
    pub system: Style,
    pub program: Style,
    pub library: Style,
    pub dependency: Style,
}

impl Default for PacsortTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PacsortTheme {
    /// Width of separator rules.
    pub const RULE_WIDTH: usize = 56;

    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(220),
            error: Style::new().red().bold(),
            name: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().color256(220).bold(),
            header: Style::new().color256(220),
            rule: Style::new().color256(223),
            footer: Style::new().on_color256(235),
            system: Style::new().blue(),
            program: Style::new().green(),
            library: Style::new().color256(220),
            dependency: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            name: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            rule: Style::new(),
            footer: Style::new(),
            system: Style::new(),
            program: Style::new(),
            library: Style::new(),
            dependency: Style::new(),
        }
    }

    /// The coloured theme if colours are enabled, else the plain one.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Style for a category label.
    pub fn category(&self, category: Category) -> &Style {
        match category {
            Category::System => &self.system,
            Category::Program => &self.program,
            Category::Library => &self.library,
            Category::Dependency => &self.dependency,
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section heading.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("{}:", title)))
    }

    /// A horizontal separator rule.
    pub fn format_rule(&self) -> String {
        format!("{}", self.rule.apply_to("-".repeat(Self::RULE_WIDTH)))
    }

    /// A listing line: name followed by the dimmed description.
    pub fn format_entry(&self, name: &str, description: &str) -> String {
        if description.is_empty() {
            format!("{}", self.name.apply_to(name))
        } else {
            format!(
                "{} {}",
                self.name.apply_to(name),
                self.dim.apply_to(format!("({})", description))
            )
        }
    }

    /// Footer under a category listing.
    pub fn format_category_count(&self, count: usize, category: Category) -> String {
        format!(
            "{}{}{}{}{}",
            self.highlight.apply_to(count),
            self.footer.apply_to(" packages in category '"),
            self.highlight.apply_to(category),
            self.footer.apply_to("'"),
            self.footer.apply_to(" installed"),
        )
    }

    /// A package that was recorded during reconciliation.
    pub fn format_added(&self, name: &str) -> String {
        format!("{} has been added", self.success.apply_to(name))
    }

    /// A package that was dropped during reconciliation.
    pub fn format_removed(&self, name: &str) -> String {
        format!("{} has been removed", self.error.apply_to(name))
    }

    /// The classification question, naming each code in its category colour.
    pub fn format_classify_choices(&self) -> String {
        let codes: Vec<String> = Category::ASSIGNABLE
            .iter()
            .map(|&c| format!("'{}'", self.category(c).apply_to(c.code())))
            .collect();
        let names: Vec<String> = Category::ASSIGNABLE
            .iter()
            .map(|&c| format!("{}", self.category(c).apply_to(c)))
            .collect();
        format!(
            "{}, {} or {}? ({}, {} or {})",
            codes[0], codes[1], codes[2], names[0], names[1], names[2]
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

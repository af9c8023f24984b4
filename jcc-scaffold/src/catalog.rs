/// Frontend flavours a new project can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    /// Server-rendered Handlebars views, the classic starter.
    Handlebars,
    InertiaReact,
    InertiaVue,
}

impl Frontend {
    pub const ALL: [Frontend; 3] = [
        Frontend::Handlebars,
        Frontend::InertiaReact,
        Frontend::InertiaVue,
    ];

    /// Label shown in the interactive prompt.
    pub fn label(self) -> &'static str {
        match self {
            Frontend::Handlebars => "Handlebars (default)",
            Frontend::InertiaReact => "Inertia + React",
            Frontend::InertiaVue => "Inertia + Vue",
        }
    }

    /// Look up a frontend by its prompt label (trimmed, case-insensitive).
    pub fn from_label(label: &str) -> Option<Frontend> {
        let label = label.trim();
        Frontend::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label))
    }
}

/// Where a template is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub url: &'static str,
    pub branch: Option<&'static str>,
}

const STARTER_REPO: &str = "https://github.com/jammehabdou64/jcc-express-mvc-library";

const ENTRIES: &[(Frontend, TemplateSource)] = &[
    (
        Frontend::Handlebars,
        TemplateSource {
            url: STARTER_REPO,
            branch: None,
        },
    ),
    (
        Frontend::InertiaReact,
        TemplateSource {
            url: STARTER_REPO,
            branch: Some("inertia-react"),
        },
    ),
    (
        Frontend::InertiaVue,
        TemplateSource {
            url: STARTER_REPO,
            branch: Some("inertia-vue"),
        },
    ),
];

/// Read-only mapping from [`Frontend`] to its [`TemplateSource`].
#[derive(Debug, Clone, Copy)]
pub struct TemplateCatalog {
    entries: &'static [(Frontend, TemplateSource)],
    default: Frontend,
}

impl TemplateCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        TemplateCatalog {
            entries: ENTRIES,
            default: Frontend::Handlebars,
        }
    }

    pub fn default_frontend(&self) -> Frontend {
        self.default
    }

    /// Prompt labels, in catalog order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(f, _)| f.label()).collect()
    }

    pub fn source(&self, frontend: Frontend) -> &TemplateSource {
        self.entries
            .iter()
            .find(|(f, _)| *f == frontend)
            .or_else(|| self.entries.iter().find(|(f, _)| *f == self.default))
            .map(|(_, s)| s)
            .unwrap_or(&self.entries[0].1)
    }

    /// Resolve a prompt answer to a frontend, falling back to the default
    /// for a missing or unknown label.
    pub fn frontend_for(&self, label: Option<&str>) -> Frontend {
        label
            .and_then(Frontend::from_label)
            .filter(|f| self.entries.iter().any(|(e, _)| e == f))
            .unwrap_or(self.default)
    }

    /// Resolve a prompt answer straight to its template source.
    pub fn resolve(&self, label: Option<&str>) -> &TemplateSource {
        self.source(self.frontend_for(label))
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_catalog_order() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(
            catalog.labels(),
            vec!["Handlebars (default)", "Inertia + React", "Inertia + Vue"]
        );
    }

    #[test]
    fn label_lookup_ignores_case_and_padding() {
        assert_eq!(
            Frontend::from_label("  inertia + vue "),
            Some(Frontend::InertiaVue)
        );
        assert_eq!(Frontend::from_label("Svelte"), None);
    }
}

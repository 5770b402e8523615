use serde::Serialize;

/// Named colour preset a slide can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

/// Named content arrangement a slide can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub name: &'static str,
    pub class_name: &'static str,
    pub description: &'static str,
}

/// Fixed theme registry. The first entry is the fallback.
pub const THEMES: &[Theme] = &[
    Theme {
        name: "Default",
        background: "bg-white dark:bg-slate-950",
        text: "text-slate-900 dark:text-slate-50",
        accent: "text-blue-600 dark:text-blue-400",
    },
    Theme {
        name: "Dark",
        background: "bg-slate-900",
        text: "text-slate-50",
        accent: "text-blue-400",
    },
    Theme {
        name: "Light",
        background: "bg-slate-50",
        text: "text-slate-900",
        accent: "text-blue-600",
    },
    Theme {
        name: "Blue",
        background: "bg-blue-50 dark:bg-blue-900",
        text: "text-blue-900 dark:text-blue-50",
        accent: "text-blue-600 dark:text-blue-400",
    },
    Theme {
        name: "Green",
        background: "bg-green-50 dark:bg-green-900",
        text: "text-green-900 dark:text-green-50",
        accent: "text-green-600 dark:text-green-400",
    },
];

/// Fixed layout registry. The first entry is the fallback.
pub const LAYOUTS: &[Layout] = &[
    Layout {
        name: "Centered",
        class_name: "flex flex-col items-center justify-center text-center",
        description: "Content centered on the slide",
    },
    Layout {
        name: "Left Aligned",
        class_name: "flex flex-col items-start justify-center",
        description: "Content aligned to the left",
    },
    Layout {
        name: "Right Aligned",
        class_name: "flex flex-col items-end justify-center",
        description: "Content aligned to the right",
    },
    Layout {
        name: "Two Column",
        class_name: "grid grid-cols-2 gap-8 items-center",
        description: "Content split into two columns",
    },
    Layout {
        name: "Split Screen",
        class_name: "grid grid-cols-2 gap-0 h-full",
        description: "Screen split into two equal sections",
    },
];

pub const DEFAULT_THEME: &str = THEMES[0].name;
pub const DEFAULT_LAYOUT: &str = LAYOUTS[0].name;

/// Map a requested theme name onto the registry (case-insensitive).
/// Absent or unknown names resolve to `Default`.
pub fn resolve_theme(name: Option<&str>) -> &'static str {
    name.map(str::trim)
        .and_then(|n| THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(n)))
        .map_or(DEFAULT_THEME, |t| t.name)
}

/// Map a requested layout name onto the registry (case-insensitive).
/// Absent or unknown names resolve to `Centered`.
pub fn resolve_layout(name: Option<&str>) -> &'static str {
    name.map(str::trim)
        .and_then(|n| LAYOUTS.iter().find(|l| l.name.eq_ignore_ascii_case(n)))
        .map_or(DEFAULT_LAYOUT, |l| l.name)
}

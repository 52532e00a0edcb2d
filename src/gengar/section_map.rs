//! Per-section path defaults for the item fields that vary by section type.

/// Item paths for the four configurable slots of a section widget.
///
/// A slot with several paths renders them joined, skipping blank ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPaths {
    pub title: &'static [&'static str],
    pub subtitle: &'static [&'static str],
    pub headline: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

impl SectionPaths {
    pub const DEFAULT: SectionPaths = SectionPaths {
        title: &["title"],
        subtitle: &["subtitle"],
        headline: &["headline"],
        keywords: &["keywords"],
    };

    const fn titled(title: &'static [&'static str], subtitle: &'static [&'static str]) -> Self {
        SectionPaths {
            title,
            subtitle,
            ..Self::DEFAULT
        }
    }
}

impl Default for SectionPaths {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sections whose items are short enough to pack tightly.
pub const COMPACT_SECTIONS: &[&str] = &["skills", "interests", "languages"];

/// Sections whose item titles carry extra weight.
pub const EMPHASIZED_SECTIONS: &[&str] = &["work", "education"];

/// Returns the path defaults for a built-in section id. Custom sections use
/// the generic `title`/`subtitle`/`headline`/`keywords` slots.
pub fn section_paths(id: &str) -> SectionPaths {
    match id {
        "work" => SectionPaths::titled(&["name"], &["position"]),
        "education" => SectionPaths {
            headline: &["score"],
            ..SectionPaths::titled(&["institution"], &["degree", "area"])
        },
        "awards" => SectionPaths::titled(&["title"], &["awarder"]),
        "certifications" => SectionPaths::titled(&["name"], &["issuer"]),
        "publications" => SectionPaths::titled(&["name"], &["publisher"]),
        "skills" | "languages" | "interests" | "projects" => SectionPaths {
            title: &["name"],
            ..SectionPaths::DEFAULT
        },
        "volunteer" => SectionPaths::titled(&["organization"], &["position"]),
        "references" => SectionPaths::titled(&["name"], &["relationship"]),
        _ => SectionPaths::DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_joins_degree_and_area() {
        let paths = section_paths("education");
        assert_eq!(paths.title, &["institution"]);
        assert_eq!(paths.subtitle, &["degree", "area"]);
        assert_eq!(paths.headline, &["score"]);
        assert_eq!(paths.keywords, &["keywords"]);
    }

    #[test]
    fn custom_sections_use_generic_slots() {
        assert_eq!(section_paths("custom.1a2b"), SectionPaths::DEFAULT);
        assert_eq!(section_paths("work").subtitle, &["position"]);
    }
}

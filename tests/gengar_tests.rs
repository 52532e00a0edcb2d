mod common;

use common::fixtures::{bare_resume, sample_resume};
use common::{gengar_text, gengar_tree, init_logging, TestResult};
use serde_json::json;
use vitae::{Color, PipelineBuilder, Theme};
use vitae_template_core::{FieldKind, PhotoShape, RenderNode, RenderedGroup};

fn group<'a>(nodes: &'a [RenderNode], role: &str) -> Option<&'a RenderedGroup> {
    nodes.iter().find_map(|n| match n {
        RenderNode::Group(g) if g.role == role => Some(g),
        _ => None,
    })
}

fn field_value<'a>(group: &'a RenderedGroup, name: &str) -> Option<&'a str> {
    group.children.iter().find_map(|n| match n {
        RenderNode::Field(f) if f.name == name => Some(f.value.as_str()),
        _ => None,
    })
}

#[test]
fn test_masthead_sidebar_contents() -> TestResult {
    init_logging();
    let tree = gengar_tree(&sample_resume())?;
    let sidebar = &tree.pages[0].columns[0];
    assert_eq!(sidebar.role, "sidebar");

    let masthead = group(&sidebar.nodes, "masthead-sidebar").ok_or("missing masthead")?;
    let Some(RenderNode::Image(photo)) = masthead.children.first() else {
        return Err("photo should lead the masthead".into());
    };
    assert_eq!(photo.shape, PhotoShape::Rounded);
    assert!(photo.border);

    assert_eq!(field_value(masthead, "name"), Some("Ada Lovelace"));
    assert_eq!(field_value(masthead, "location"), Some("London, United Kingdom"));
    assert_eq!(field_value(masthead, "birthdate"), Some("Dec 1815"));
    assert_eq!(field_value(masthead, "phone"), Some("+44 20 7946 0000"));

    let Some(RenderNode::List(profiles)) = masthead.children.last() else {
        return Err("profiles should close the masthead".into());
    };
    let links: Vec<_> = profiles
        .items
        .iter()
        .map(|p| p.get("username").and_then(|u| u.link.clone()))
        .collect();
    assert_eq!(links, vec![Some("http://github.com/ada".to_string()), None]);

    // #f44336 is a dark primary, so icons use the background color.
    assert_eq!(masthead.icon_color, Some(Color::white()));
    Ok(())
}

#[test]
fn test_masthead_main_summary() -> TestResult {
    let tree = gengar_tree(&sample_resume())?;
    let main = &tree.pages[0].columns[1];
    let summary = group(&main.nodes, "masthead-main").ok_or("missing summary")?;

    let Some(RenderNode::Field(field)) = summary.children.first() else {
        return Err("summary field missing".into());
    };
    assert_eq!(field.kind, FieldKind::Markdown);
    assert_eq!(summary.background.map(|c| c.a), Some(0.15));
    Ok(())
}

#[test]
fn test_layout_places_sections() -> TestResult {
    let tree = gengar_tree(&sample_resume())?;
    let ids = |column: usize| -> Vec<String> {
        tree.pages[0].columns[column]
            .nodes
            .iter()
            .filter_map(|n| match n {
                RenderNode::Section(s) => Some(s.id.to_string()),
                _ => None,
            })
            .collect()
    };
    // Hidden awards and empty interests never make it into the tree.
    assert_eq!(ids(0), vec!["skills"]);
    assert_eq!(ids(1), vec!["work", "education"]);
    Ok(())
}

#[test]
fn test_section_items_suppress_blanks() -> TestResult {
    let tree = gengar_tree(&sample_resume())?;

    let work = tree.section("work").ok_or("missing work")?;
    assert!(work.style.emphasized_title);
    let first = &work.items[0];
    assert_eq!(first.get("title").map(|f| f.value.as_str()), Some("Analytical Engine"));
    assert_eq!(first.get("date").map(|f| f.value.as_str()), Some("Jan 1842 - Sep 1843"));
    assert_eq!(
        first.get("url").and_then(|f| f.link.as_deref()),
        Some("http://example.com/engine")
    );

    let second = &work.items[1];
    assert_eq!(second.get("date").map(|f| f.value.as_str()), Some("Mar 1844 - Present"));
    assert!(second.get("subtitle").is_none());
    assert!(second.get("url").is_none());
    assert!(second.get("summary").is_none());

    let education = tree.section("education").ok_or("missing education")?;
    assert_eq!(
        education.items[0].get("subtitle").map(|f| f.value.as_str()),
        Some("Mathematics")
    );
    assert!(education.items[0].get("headline").is_none());
    Ok(())
}

#[test]
fn test_skill_levels() -> TestResult {
    let tree = gengar_tree(&sample_resume())?;
    let skills = tree.section("skills").ok_or("missing skills")?;
    assert!(skills.style.compact);
    assert_eq!(skills.columns, 2);

    let filled: Vec<Option<usize>> = skills
        .items
        .iter()
        .map(|item| item.get("levelNum").and_then(|f| f.level).map(|l| l.filled))
        .collect();
    assert_eq!(filled, vec![Some(5), None, Some(3)]);

    assert_eq!(
        skills.items[0].get("keywords").map(|f| f.value.as_str()),
        Some("Calculus, Logic")
    );
    assert!(skills.items[1].get("keywords").is_none());
    assert!(skills.items[1].get("level").is_none());
    Ok(())
}

#[test]
fn test_text_output() -> TestResult {
    let text = gengar_text(&sample_resume())?;
    assert!(text.contains("[sidebar]"));
    assert!(text.contains("## Work Experience"));
    assert!(text.contains("- Analytical Engine"));
    assert!(text.contains("●●●●● 10"));
    assert!(text.contains("●●●○○ 7"));
    assert!(text.contains("ada@example.com <mailto:ada@example.com>"));
    assert!(!text.contains("Awards"));
    assert!(!text.contains("Interests"));
    Ok(())
}

#[test]
fn test_bare_resume_renders_only_the_name() -> TestResult {
    let tree = gengar_tree(&bare_resume())?;
    let sidebar = &tree.pages[0].columns[0];
    let masthead = group(&sidebar.nodes, "masthead-sidebar").ok_or("missing masthead")?;
    assert_eq!(masthead.children.len(), 1);
    assert_eq!(field_value(masthead, "name"), Some("Charles Babbage"));
    assert!(tree.pages[0].columns[1].nodes.is_empty());
    Ok(())
}

#[test]
fn test_overrides_apply_to_render() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_date_format("YYYY")
        .with_level_marks(10)
        .with_theme(Theme {
            primary: Color::gray(0xee),
            ..Theme::default()
        })
        .build()?;
    let tree = pipeline.render_tree(&sample_resume());

    let sidebar = &tree.pages[0].columns[0];
    let masthead = group(&sidebar.nodes, "masthead-sidebar").ok_or("missing masthead")?;
    assert_eq!(field_value(masthead, "birthdate"), Some("1815"));
    assert_eq!(masthead.icon_color, Some(Color::gray(0)));

    let skills = tree.section("skills").ok_or("missing skills")?;
    let music = skills.items[2].get("levelNum").and_then(|f| f.level).ok_or("no level")?;
    assert_eq!((music.filled, music.total), (7, 10));
    Ok(())
}

#[test]
fn test_malformed_metadata_falls_back() -> TestResult {
    init_logging();
    let mut doc = sample_resume();
    doc["metadata"] = json!({ "layout": 42, "theme": { "primary": "not a color" } });

    let tree = gengar_tree(&doc)?;
    // Without a layout every visible section lands in the main column.
    let main_ids: Vec<_> = tree.pages[0].columns[1]
        .nodes
        .iter()
        .filter_map(|n| match n {
            RenderNode::Section(s) => Some(s.id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(main_ids, vec!["work", "education", "skills"]);

    let work = tree.section("work").ok_or("missing work")?;
    assert_eq!(
        work.items[0].get("date").map(|f| f.value.as_str()),
        Some("January 1842 - September 1843")
    );
    Ok(())
}

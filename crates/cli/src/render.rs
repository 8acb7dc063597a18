//! Terminal rendering of view panels
//!
//! Every function returns a `String` so output can be tested without a
//! terminal. Numbers in brackets are the 1-based indexes the interactive
//! commands accept.

use std::fmt::Write;

use console::style;
use meapi_domain::{Link, Notification, PortfolioRepository, Profile, Project, SearchResult};
use meapi_usecase::{ProfilePanel, ProjectListPanel, SearchPanel, Shell};

use crate::style::{category_icon, CLOSE, CROSS, DOT, EMPTY, GRAD, MAIL};

const SKELETON_WIDTHS: [usize; 4] = [24, 32, 18, 28];

pub fn profile_panel(panel: &ProfilePanel<'_>) -> String {
    match panel {
        ProfilePanel::Skeleton => SKELETON_WIDTHS
            .iter()
            .map(|width| format!("{}\n", style("░".repeat(*width)).dim()))
            .collect(),
        ProfilePanel::Error { message } => format!(
            "{} {}\n  {}\n  {}\n",
            CROSS,
            style("Error loading profile").red().bold(),
            message,
            style("Type /retry to reload the page").dim()
        ),
        ProfilePanel::Detail(profile) => profile_detail(profile),
    }
}

fn profile_detail(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  {}",
        style(format!("({})", profile.avatar_glyph())).cyan().bold(),
        style(profile.display_name()).bold(),
        style(format!("ID: {}", profile.id().get())).dim()
    );
    if !profile.email().is_empty() {
        let _ = writeln!(out, "{} mailto:{}", MAIL, profile.email());
    }
    if !profile.education().is_empty() {
        let _ = writeln!(out, "{} {}", GRAD, profile.education());
    }

    if !profile.skills().is_empty() {
        let skills: Vec<String> = profile
            .skills()
            .iter()
            .enumerate()
            .map(|(i, skill)| format!("[{}] {}", i + 1, style(skill.name()).cyan()))
            .collect();
        let _ = writeln!(out, "Skills: {}", skills.join("  "));
    }

    if !profile.projects().is_empty() {
        let _ = writeln!(out, "{}", style("Projects").bold());
        for project in profile.projects() {
            let _ = write!(out, "  {} {}", DOT, project.title());
            if !project.description().is_empty() {
                let _ = write!(out, " - {}", style(project.description()).dim());
            }
            out.push('\n');
        }
    }

    write_links(&mut out, profile.links(), "");
    out
}

pub fn project_panel(panel: &ProjectListPanel<'_>) -> String {
    match panel {
        ProjectListPanel::Spinner => format!("{}\n", style("Loading projects...").dim()),
        ProjectListPanel::Error { message } => {
            format!("{} {}\n", style("Error:").red().bold(), message)
        }
        ProjectListPanel::Empty { filter } => format!(
            "{} {}\n  {}\n",
            EMPTY,
            style("No projects found").bold(),
            ProjectListPanel::empty_hint(*filter)
        ),
        ProjectListPanel::Grid { projects, .. } => {
            let mut out = String::new();
            if let Some(banner) = panel.banner() {
                let _ = writeln!(out, "{}", style(banner).yellow());
            }
            for (i, project) in projects.iter().enumerate() {
                project_card(&mut out, i + 1, project);
            }
            out
        }
    }
}

fn project_card(out: &mut String, index: usize, project: &Project) {
    let _ = writeln!(
        out,
        "[{}] {}  {}",
        index,
        style(project.title()).bold(),
        style(format!("#{}", project.id().get())).dim()
    );
    if !project.description().is_empty() {
        let _ = writeln!(out, "    {}", project.description());
    }
    if !project.skills().is_empty() {
        let names: Vec<&str> = project.skills().iter().map(|s| s.name()).collect();
        let _ = writeln!(out, "    {}", style(names.join(" · ")).cyan());
    }
    write_links(out, project.links(), "    ");
}

fn write_links(out: &mut String, links: &[Link], indent: &str) {
    for link in links {
        let _ = writeln!(out, "{}{}: {}", indent, link.label, style(&link.url).underlined());
    }
}

pub fn search_panel(panel: &SearchPanel<'_>) -> String {
    match panel {
        SearchPanel::Idle => String::new(),
        SearchPanel::Searching => format!("{}\n", style("Searching...").dim()),
        SearchPanel::Failed { message } => {
            format!("{} {}\n", style("Error:").red().bold(), message)
        }
        SearchPanel::Results(result) => search_results(result),
    }
}

fn search_results(result: &SearchResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style(format!("Projects ({})", result.projects.len())).bold());
    if result.projects.is_empty() {
        let _ = writeln!(out, "  {}", style("No projects found").dim());
    }
    for project in &result.projects {
        let _ = writeln!(out, "  {} {}", DOT, project.title());
    }

    let _ = writeln!(out, "{}", style(format!("Profiles ({})", result.profiles.len())).bold());
    if result.profiles.is_empty() {
        let _ = writeln!(out, "  {}", style("No profiles found").dim());
    }
    for profile in &result.profiles {
        let _ = write!(out, "  {} {}", DOT, profile.display_name());
        if !profile.email().is_empty() {
            let _ = write!(out, " <{}>", profile.email());
        }
        out.push('\n');
    }
    out
}

pub fn notification(notification: &Notification) -> String {
    format!(
        "{} {}  {}\n",
        category_icon(notification.category()),
        notification.message(),
        style(format!("[{} /close]", CLOSE)).dim()
    )
}

pub fn filter_chip(skill: &str) -> String {
    format!(
        "Filtering by: {} {}\n",
        style(skill).cyan().bold(),
        style(format!("{} /clear", CLOSE)).dim()
    )
}

/// The whole page, top to bottom
pub fn page<R: PortfolioRepository>(shell: &Shell<R>) -> String {
    let mut out = String::new();
    if let Some(current) = shell.notification() {
        out.push_str(&notification(current));
        out.push('\n');
    }

    out.push_str(&profile_panel(&shell.profile().panel()));
    out.push('\n');

    if let Some(skill) = shell.active_skill() {
        out.push_str(&filter_chip(skill));
    }
    out.push_str(&project_panel(&shell.projects().panel()));

    let search = search_panel(&shell.search().panel());
    if !search.is_empty() {
        out.push('\n');
        out.push_str(&search);
    }
    out
}

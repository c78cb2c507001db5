//! The version-controlled directory definition.
//!
//! This is the persisted shape of the directory: plain Rust, reviewed like
//! any other change. It is loaded once at startup into an immutable
//! [`Directory`] and never touched again.

use chrono::NaiveDate;

use super::{Directory, DirectoryBuilder, DirectoryError};
use crate::models::{Group, Item, Section};

/// Date the entries below were last revised. Surfaced as `<lastmod>` in the
/// sitemap; bump it when the content changes.
pub fn revision() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 14).expect("valid revision date")
}

/// Build the shipped directory. Fails fast on any inconsistency in the
/// definition below, before the server starts taking traffic.
pub fn load() -> Result<Directory, DirectoryError> {
    let mut builder = DirectoryBuilder::new();

    builder.register(Section::new(
        "official-resources",
        "Official Resources",
        "Documentation, releases, and source maintained by the LinkHub team.",
        vec![
            Group::titled(
                "Documentation",
                vec![
                    Item::new(
                        "User Guide",
                        "https://docs.linkhub.dev/guide",
                        Some("Installation, configuration, and day-to-day usage."),
                    )?,
                    Item::new(
                        "API Reference",
                        "https://docs.linkhub.dev/api",
                        Some("Complete reference for the JSON API."),
                    )?,
                    Item::new(
                        "Release Notes",
                        "https://docs.linkhub.dev/releases",
                        None,
                    )?,
                ],
            )?,
            Group::titled(
                "Source",
                vec![
                    Item::new(
                        "GitHub Repository",
                        "https://github.com/linkhub/linkhub",
                        Some("Issues and pull requests welcome."),
                    )?,
                    Item::new(
                        "Roadmap",
                        "https://github.com/linkhub/linkhub/projects/1",
                        None,
                    )?,
                ],
            )?,
        ],
    )?)?;

    builder.register(Section::new(
        "community",
        "Community",
        "Places where LinkHub users and contributors gather.",
        vec![
            Group::untitled(vec![
                Item::new(
                    "Discord",
                    "https://discord.gg/linkhub",
                    Some("Real-time chat for questions and announcements."),
                )?,
                Item::new(
                    "Discussions",
                    "https://github.com/linkhub/linkhub/discussions",
                    Some("Longer-form questions, ideas, and show-and-tell."),
                )?,
                Item::new("Mastodon", "https://hachyderm.io/@linkhub", None)?,
            ])?,
        ],
    )?)?;

    builder.register(Section::new(
        "integrations",
        "Integrations",
        "Tools and services that plug into LinkHub or consume its API.",
        vec![
            Group::titled(
                "Publishing",
                vec![
                    Item::new(
                        "Static Site Export",
                        "https://github.com/linkhub/linkhub-export",
                        Some("Render the directory to static HTML at build time."),
                    )?,
                    Item::new(
                        "Netlify Deploy Plugin",
                        "https://github.com/linkhub/netlify-plugin-linkhub",
                        None,
                    )?,
                ],
            )?,
            Group::titled(
                "Notifications",
                vec![
                    Item::new(
                        "Slack Webhook Bridge",
                        "https://github.com/linkhub/linkhub-slack",
                        Some("Post a digest when directory content changes."),
                    )?,
                    Item::new(
                        "RSS Feed Adapter",
                        "https://github.com/linkhub/linkhub-rss",
                        None,
                    )?,
                ],
            )?,
        ],
    )?)?;

    builder.register(Section::new(
        "applications",
        "Applications",
        "Sites and products built on the directory engine.",
        vec![
            Group::untitled(vec![
                Item::new(
                    "Awesome Self-Hosted Mirror",
                    "https://awesome.linkhub.dev",
                    Some("A community-curated catalog served by LinkHub."),
                )?,
                Item::new(
                    "Rust Learning Hub",
                    "https://rust.linkhub.dev",
                    Some("Curated Rust books, talks, and exercises."),
                )?,
                Item::new("Starter Template", "https://github.com/linkhub/starter", None)?,
            ])?,
        ],
    )?)?;

    builder.register(Section::new(
        "education",
        "Education",
        "Courses, books, and talks for learning the surrounding ecosystem.",
        vec![
            Group::titled(
                "Courses",
                vec![
                    Item::new(
                        "Zero to Production in Rust",
                        "https://www.zero2prod.com",
                        Some("Backend development in Rust, from scratch to deploy."),
                    )?,
                    Item::new("The Rust Book", "https://doc.rust-lang.org/book/", None)?,
                ],
            )?,
            Group::titled(
                "Talks",
                vec![
                    Item::new(
                        "Serving Content with Axum",
                        "https://www.youtube.com/watch?v=Wnb_n5YktO8",
                        None,
                    )?,
                ],
            )?,
            Group::titled(
                "On this site",
                vec![
                    Item::new(
                        "Step-by-step Guides",
                        "/guides",
                        Some("Practical walkthroughs hosted in this directory."),
                    )?,
                ],
            )?,
        ],
    )?)?;

    builder.register(Section::new(
        "guides",
        "Guides",
        "Practical walkthroughs for operating and extending a directory.",
        vec![
            Group::titled(
                "Getting started",
                vec![
                    Item::new(
                        "Running LinkHub Locally",
                        "https://docs.linkhub.dev/guides/local",
                        None,
                    )?,
                    Item::new(
                        "Authoring Directory Content",
                        "https://docs.linkhub.dev/guides/content",
                        Some("How sections, groups, and items fit together."),
                    )?,
                ],
            )?,
            Group::titled(
                "Operations",
                vec![
                    Item::new(
                        "Deploying Behind a Proxy",
                        "https://docs.linkhub.dev/guides/proxy",
                        None,
                    )?,
                    Item::new(
                        "Submitting Your Sitemap",
                        "https://docs.linkhub.dev/guides/sitemap",
                        Some("Getting listing pages indexed by search engines."),
                    )?,
                ],
            )?,
        ],
    )?)?;

    Ok(builder.build())
}

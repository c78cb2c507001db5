use linkhub::directory::{content, DirectoryBuilder, DirectoryError};
use linkhub::models::{Group, Item, Section};
use linkhub::routes::RouteTable;

fn official_resources() -> Section {
    Section::new(
        "official-resources",
        "Official",
        "Documentation and source.",
        vec![Group::titled(
            "Docs",
            vec![Item::new("API Reference", "https://example.com/api", None).unwrap()],
        )
        .unwrap()],
    )
    .unwrap()
}

mod registration {
    use super::*;

    #[test]
    fn resolve_returns_the_registered_record() {
        let mut builder = DirectoryBuilder::new();
        builder.register(official_resources()).unwrap();
        let directory = builder.build();

        let section = directory.resolve("official-resources").unwrap();
        assert_eq!(section, &official_resources());
    }

    #[test]
    fn unknown_slug_resolves_to_none() {
        let mut builder = DirectoryBuilder::new();
        builder.register(official_resources()).unwrap();
        let directory = builder.build();

        assert!(directory.resolve("nonexistent-slug").is_none());
    }

    #[test]
    fn second_registration_of_a_slug_fails() {
        let mut builder = DirectoryBuilder::new();
        builder.register(official_resources()).unwrap();

        let err = builder.register(official_resources()).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::DuplicateSlug {
                slug: "official-resources".to_string()
            }
        );
    }
}

mod ordering {
    use super::*;

    fn section(slug: &str, item_titles: &[&str]) -> Section {
        let items = item_titles
            .iter()
            .map(|t| Item::new(*t, "https://example.com", None).unwrap())
            .collect();
        Section::new(
            slug,
            slug.to_uppercase(),
            "...",
            vec![
                Group::titled("First", items).unwrap(),
                Group::titled(
                    "Second",
                    vec![Item::new("Trailer", "/trailer", None).unwrap()],
                )
                .unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn sections_keep_registration_order() {
        let mut builder = DirectoryBuilder::new();
        builder.register(section("zeta", &["a"])).unwrap();
        builder.register(section("alpha", &["a"])).unwrap();
        builder.register(section("mid", &["a"])).unwrap();
        let directory = builder.build();

        let slugs: Vec<_> = directory.all().iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn groups_and_items_keep_author_order() {
        let mut builder = DirectoryBuilder::new();
        builder.register(section("guides", &["Zebra", "Alpha", "Mid"])).unwrap();
        let directory = builder.build();

        let resolved = directory.resolve("guides").unwrap();
        let group_titles: Vec<_> = resolved
            .groups
            .iter()
            .map(|g| g.display_title())
            .collect();
        assert_eq!(group_titles, vec!["First", "Second"]);

        let item_titles: Vec<_> = resolved.groups[0]
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(item_titles, vec!["Zebra", "Alpha", "Mid"]);
    }
}

mod route_validation {
    use super::*;

    #[test]
    fn end_to_end_scenario_validates() {
        let mut builder = DirectoryBuilder::new();
        builder.register(official_resources()).unwrap();
        let directory = builder.build();

        let table = RouteTable::new(["/", "/official-resources"]);
        table.validate(&directory).unwrap();

        let section = directory.resolve("official-resources").unwrap();
        assert_eq!(section.groups[0].items[0].href, "https://example.com/api");
    }

    #[test]
    fn uncovered_route_fails_validation() {
        let directory = DirectoryBuilder::new().build();
        let table = RouteTable::new(["/official-resources"]);

        let err = table.validate(&directory).unwrap_err();
        assert_eq!(
            err,
            DirectoryError::MissingSection {
                slug: "official-resources".to_string()
            }
        );
    }
}

mod shipped_content {
    use super::*;

    #[test]
    fn loads_and_covers_the_standard_routes() {
        let directory = content::load().unwrap();
        RouteTable::standard().validate(&directory).unwrap();
    }

    #[test]
    fn official_resources_is_registered() {
        let directory = content::load().unwrap();
        let section = directory.resolve("official-resources").unwrap();
        assert_eq!(section.title, "Official Resources");
        assert!(!section.groups.is_empty());
    }

    #[test]
    fn classification_matches_href_shape() {
        let directory = content::load().unwrap();
        for section in directory.all() {
            for group in &section.groups {
                for item in &group.items {
                    if item.href.starts_with("http") {
                        assert!(item.is_external(), "{} should be external", item.href);
                    }
                    if item.href.starts_with('/') {
                        assert!(!item.is_external(), "{} should be internal", item.href);
                    }
                }
            }
        }
    }
}

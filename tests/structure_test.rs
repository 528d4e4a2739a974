use usctitle::document::{
    normalize_paragraphs, parse_body, parse_document, Title, TitleBuilder, UsCode,
};

fn parse(raw: &[&str], source: &str) -> UsCode {
    let lines = normalize_paragraphs(raw);
    parse_document(&lines, source)
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_title_chapter_and_inline_section() {
        let code = parse(
            &[
                "TITLE 3.—The President",
                "Chapter 1.—Presidential Elections.",
                "101. Time of choosing electors— Electors shall be appointed...",
            ],
            "Title 3 - The President",
        );

        let title = &code.title;
        assert_eq!(title.name, "TITLE 3.—The President");
        assert_eq!(title.number.as_deref(), Some("3"));
        assert_eq!(title.chapters.len(), 1);

        let chapter = &title.chapters[0];
        assert_eq!(chapter.name, "Chapter 1.—Presidential Elections.");
        assert_eq!(chapter.sections.len(), 1);

        let section = &chapter.sections[0];
        assert_eq!(section.name(), "101. Time of choosing electors");
        assert_eq!(section.body, "Electors shall be appointed...");
    }

    #[test]
    fn test_toc_row_before_first_chapter_is_discarded() {
        let code = parse(
            &[
                "TITLE 3.—The President",
                "Chapter   Sec.",
                "1. Presidential Elections and Vacancies 1",
                "Chapter 1.—Presidential Elections",
                "1. Time of election—",
            ],
            "Title 3",
        );

        let chapters = &code.title.chapters;
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].name, "Chapter 1.—Presidential Elections.");
    }

    #[test]
    fn test_section_without_chapter_gets_unspecified_chapter() {
        let mut builder = TitleBuilder::new(Title::new(Some("3".into()), "The President"));
        let lines = normalize_paragraphs(["101. Time of choosing electors— Electors shall meet."]);
        parse_body(&mut builder, &lines);

        let title = builder.finish();
        assert_eq!(title.chapters.len(), 1);
        assert_eq!(title.chapters[0].name, "Chapter 0.—UNSPECIFIED.");
        assert_eq!(title.chapters[0].sections[0].number, "101");
    }

    #[test]
    fn test_consecutive_section_starts_have_empty_bodies() {
        let code = parse(
            &[
                "Chapter 1.—Presidential Elections",
                "101. Time of choosing electors—",
                "102. Failure to make choice on prescribed day—",
            ],
            "Title 3",
        );

        let sections = &code.title.chapters[0].sections;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body, "");
        assert_eq!(sections[1].body, "");
        assert_eq!(sections[1].name(), "102. Failure to make choice on prescribed day");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_missing_title_falls_back_to_source_number() {
        for (source, number) in [("Title 3 - The President", "3"), ("title 42", "42")] {
            let code = parse(&["Chapter 1.—Anything", "1. A— b"], source);
            assert_eq!(code.title.number.as_deref(), Some(number));
            assert_eq!(code.title.name, format!("TITLE {number}.—"));
        }
    }

    #[test]
    fn test_chapter_names_end_in_one_period() {
        let code = parse(
            &[
                "Chapter 1.—Presidential Elections.",
                "Chapter 2—Succession",
                "chapter 3. – Oaths..",
            ],
            "Title 3",
        );

        let names: Vec<&str> = code.title.chapters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Chapter 1.—Presidential Elections.",
                "Chapter 2.—Succession.",
                "Chapter 3.—Oaths.",
            ]
        );
        for name in names {
            assert!(name.ends_with('.') && !name.ends_with(".."));
        }
    }

    #[test]
    fn test_multi_line_body_keeps_every_line_in_order() {
        let body_lines = [
            "(a) The electors of President and Vice President shall be appointed.",
            "(b) Each State may provide by law.",
            "(c) Nothing in this section shall apply.",
        ];
        let mut raw = vec!["Chapter 1.—Presidential Elections", "1. Time of appointing electors—"];
        raw.extend(body_lines);
        raw.push("2. Next section—");

        let code = parse(&raw, "Title 3");
        let sections = &code.title.chapters[0].sections;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body, body_lines.join("\n"));
        assert_eq!(sections[1].body, "");
    }

    #[test]
    fn test_body_stops_at_next_chapter() {
        let code = parse(
            &[
                "Chapter 1.—One",
                "1. First—",
                "body of first",
                "Chapter 2.—Two",
                "21. Second— inline body",
            ],
            "Title 3",
        );

        let chapters = &code.title.chapters;
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].sections[0].body, "body of first");
        assert_eq!(chapters[1].sections[0].body, "inline body");
    }

    #[test]
    fn test_lines_after_inline_section_are_skipped() {
        let code = parse(
            &[
                "Chapter 1.—One",
                "1. First— starts here",
                "stray paragraph",
                "2. Second— also inline",
            ],
            "Title 3",
        );

        let sections = &code.title.chapters[0].sections;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body, "starts here");
        assert_eq!(sections[1].body, "also inline");
    }

    #[test]
    fn test_no_chapter_header_produces_no_content() {
        let code = parse(
            &["TITLE 3.—The President", "101. Time of choosing electors— Electors"],
            "Title 3",
        );
        assert_eq!(code.title.name, "TITLE 3.—The President");
        assert!(code.title.chapters.is_empty());
    }

    #[test]
    fn test_en_dashes_are_accepted_after_normalization() {
        let code = parse(
            &["TITLE 3.\u{2013}The President", "Chapter 1.\u{2013}Elections", "1. A\u{2013} b"],
            "x",
        );
        assert_eq!(code.title.name, "TITLE 3.—The President");
        assert_eq!(code.title.chapters[0].sections[0].body, "b");
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use clippings_core::domain::{
    AnnotationKind, Clipping, InvalidStructure, parse_timestamp, strip_place_boilerplate,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn parses_highlight_block() -> Result<(), InvalidStructure> {
    let block = "Cain (Jose Saramago)\n\
                 - Highlight Loc. 92-94  | Added on Monday, January 11, 2010, 06:07 PM\n\
                 \n\
                 Quién ha desobedecido mis órdenes...";

    let clipping = Clipping::parse(block)?;

    assert_eq!(clipping.book(), "Cain (Jose Saramago)");
    assert_eq!(clipping.kind(), AnnotationKind::Highlight);
    assert_eq!(clipping.place(), "92-94");
    assert_eq!(clipping.timestamp(), at(2010, 1, 11, 18, 7, 0));
    assert_eq!(clipping.text(), "Quién ha desobedecido mis órdenes...");

    Ok(())
}

#[test]
fn bookmark_without_body_has_empty_text() -> Result<(), InvalidStructure> {
    let block = "Cain (Jose Saramago)\n\
                 - Bookmark on Page 45 | Added on Tuesday, January 12, 2010, 09:15 AM\n";

    let clipping = Clipping::parse(block)?;

    assert_eq!(clipping.kind(), AnnotationKind::Bookmark);
    assert_eq!(clipping.place(), "45");
    assert_eq!(clipping.timestamp(), at(2010, 1, 12, 9, 15, 0));
    assert_eq!(clipping.text(), "");

    Ok(())
}

#[test]
fn body_keeps_inner_lines_and_crlf_is_normalized() -> Result<(), InvalidStructure> {
    let block = "Book\r\n- Note Loc. 7 | Added on Monday, January 11, 2010, 12:00 AM\r\n\r\n\r\nfirst\r\n\r\nsecond";

    let clipping = Clipping::parse(block)?;

    assert_eq!(clipping.kind(), AnnotationKind::Note);
    assert_eq!(clipping.timestamp(), at(2010, 1, 11, 0, 0, 0));
    assert_eq!(clipping.text(), "\nfirst\n\nsecond");

    Ok(())
}

#[test]
fn unknown_kind_is_rejected() {
    let block = "Cain\n\
                 - Annotation Loc. 92-94  | Added on Monday, January 11, 2010, 06:07 PM\n\
                 \n\
                 text";

    assert_eq!(
        Clipping::parse(block),
        Err(InvalidStructure::UnknownKind("Annotation".into()))
    );
}

#[test]
fn kind_is_case_sensitive() {
    assert!("highlight".parse::<AnnotationKind>().is_err());
    assert_eq!("Note".parse::<AnnotationKind>(), Ok(AnnotationKind::Note));
}

#[test]
fn missing_blank_line_is_rejected() {
    let block = "Cain\n\
                 - Highlight Loc. 92-94  | Added on Monday, January 11, 2010, 06:07 PM\n\
                 Body without separator\n\
                 more body";

    assert_eq!(
        Clipping::parse(block),
        Err(InvalidStructure::BlankLineExpected(
            "Body without separator".into()
        ))
    );
}

#[test]
fn whitespace_only_third_line_counts_as_blank() -> Result<(), InvalidStructure> {
    let block = "Cain\n- Highlight Loc. 1 | Added on Monday, January 11, 2010, 06:07 PM\n \t\nbody";

    assert_eq!(Clipping::parse(block)?.text(), "body");

    Ok(())
}

#[test]
fn malformed_metadata_line_is_rejected() {
    let block = "Cain\nHighlight at 92 on Monday\n\nbody";

    assert_eq!(
        Clipping::parse(block),
        Err(InvalidStructure::MetadataLine(
            "Highlight at 92 on Monday".into()
        ))
    );
}

#[test]
fn block_with_only_a_title_is_rejected() {
    assert_eq!(
        Clipping::parse("Cain"),
        Err(InvalidStructure::MetadataLine(String::new()))
    );
}

#[test]
fn unparseable_timestamp_is_rejected() {
    let block = "Cain\n- Note Loc. 3 | Added on sometime last week\n\nbody";

    assert_eq!(
        Clipping::parse(block),
        Err(InvalidStructure::Timestamp("sometime last week".into()))
    );
}

#[test]
fn kind_is_checked_before_timestamp() {
    let block = "Cain\n- Annotation Loc. 3 | Added on sometime last week\n\nbody";

    assert_eq!(
        Clipping::parse(block),
        Err(InvalidStructure::UnknownKind("Annotation".into()))
    );
}

#[test]
fn place_boilerplate_is_stripped() {
    assert_eq!(strip_place_boilerplate("Loc. 92-94"), "92-94");
    assert_eq!(strip_place_boilerplate("on Page 45"), "45");
    assert_eq!(strip_place_boilerplate("on Page 12 | Loc. 170-71"), "12 |  170-71");
    assert_eq!(strip_place_boilerplate("page 3"), "page 3");
}

#[test]
fn timestamp_formats() {
    assert_eq!(
        parse_timestamp("Monday, January 11, 2010, 06:07 PM"),
        Ok(at(2010, 1, 11, 18, 7, 0))
    );
    assert_eq!(
        parse_timestamp("Friday, March 4, 2016 9:41:51 PM"),
        Ok(at(2016, 3, 4, 21, 41, 51))
    );
}

#[test]
fn day_first_timestamps() {
    assert_eq!(
        parse_timestamp("Sunday, 6 March 2016 14:56:36"),
        Ok(at(2016, 3, 6, 14, 56, 36))
    );
    assert_eq!(
        parse_timestamp("Sunday, 24 March 2019 10:17"),
        Ok(at(2019, 3, 24, 10, 17, 0))
    );
}

#[test]
fn timestamp_without_weekday() {
    assert_eq!(
        parse_timestamp("January 11, 2010, 6:07 PM"),
        Ok(at(2010, 1, 11, 18, 7, 0))
    );
}

#[test]
fn mismatched_weekday_does_not_reject_timestamp() {
    assert_eq!(
        parse_timestamp("Tuesday, January 11, 2010, 06:07 PM"),
        Ok(at(2010, 1, 11, 18, 7, 0))
    );
    assert_eq!(
        parse_timestamp("Monday, 6 March 2016 14:56:36"),
        Ok(at(2016, 3, 6, 14, 56, 36))
    );
}

#[test]
fn block_with_mismatched_weekday_parses() -> Result<(), InvalidStructure> {
    let block = "Cain\n- Note Loc. 3 | Added on Tuesday, January 11, 2010, 06:07 PM\n\nbody";

    assert_eq!(Clipping::parse(block)?.timestamp(), at(2010, 1, 11, 18, 7, 0));

    Ok(())
}

#[test]
fn error_messages_carry_offending_text() {
    let err = InvalidStructure::UnknownKind("Annotation".into());
    assert_eq!(err.to_string(), "unknown item type \"Annotation\"");
}

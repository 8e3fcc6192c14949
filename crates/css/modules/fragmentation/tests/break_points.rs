mod common;

use common::{Fixture, block, init_logging, inline, styled};
use css_fragmentation::{
    Boundary, BreakClassifier, BreakError, BreakHeuristics, BreakRange, PresentationTree,
    TreeUpdate, is_possible_break_point,
};
use css_style_model::{Display, LayoutRect, NodeKey, Overflow};

/// `<body><div>` where the div is a visible-overflow block at y=0 with `child_top` for its paragraph.
fn container_with_paragraph(child_top: f32) -> (Fixture, NodeKey, NodeKey) {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let container = fixture.element(
        body,
        "div",
        block(),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 200.0)),
    );
    let paragraph = fixture.element(
        container,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, child_top, 800.0, 20.0)),
    );
    fixture.text(
        paragraph,
        "Lorem ipsum",
        Some(LayoutRect::from_px(0.0, child_top, 90.0, 20.0)),
    );
    (fixture, body, container)
}

fn check(fixture: &Fixture, range: BreakRange, region: NodeKey) -> Result<bool, BreakError> {
    BreakClassifier::new(&fixture.snapshot).is_possible_break_point(&range, region)
}

#[test]
fn flush_first_child_leaves_no_room() {
    init_logging();
    let (fixture, body, container) = container_with_paragraph(0.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(container, 0), body), Ok(false));
}

#[test]
fn top_margin_gap_allows_break() {
    init_logging();
    let (fixture, body, container) = container_with_paragraph(10.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(container, 0), body), Ok(true));
}

#[test]
fn border_offset_counts_as_gap() {
    let (fixture, body, container) = container_with_paragraph(2.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(container, 0), body), Ok(true));
}

#[test]
fn position_after_children_needs_no_geometry() {
    let (mut fixture, body, container) = container_with_paragraph(0.0);
    fixture.snapshot.set_rect(container, LayoutRect::default());
    assert_eq!(check(&fixture, BreakRange::collapsed(container, 1), body), Ok(true));
}

#[test]
fn empty_container_start_is_not_a_break_point() {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let empty = fixture.element(
        body,
        "div",
        block(),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 40.0)),
    );
    assert_eq!(check(&fixture, BreakRange::collapsed(empty, 0), body), Ok(false));
}

#[test]
fn text_container_start_is_not_a_break_point() {
    let (fixture, body, container) = container_with_paragraph(10.0);
    let paragraph = fixture.snapshot.children(container)[0];
    let text = fixture.snapshot.children(paragraph)[0];
    assert_eq!(check(&fixture, BreakRange::collapsed(text, 0), body), Ok(false));
    assert_eq!(check(&fixture, BreakRange::collapsed(text, 5), body), Ok(true));
}

#[test]
fn selecting_range_is_invalid_input() {
    let (fixture, body, container) = container_with_paragraph(10.0);
    let range = BreakRange::new(Boundary::new(container, 0), Boundary::new(container, 1));
    let verdict = check(&fixture, range, body);
    assert_eq!(verdict, Err(BreakError::NotCollapsed));
    assert!(!verdict.unwrap_or(false));
}

#[test]
fn out_of_range_and_unknown_positions_are_invalid_input() {
    let (fixture, body, container) = container_with_paragraph(10.0);
    assert_eq!(
        check(&fixture, BreakRange::collapsed(container, 2), body),
        Err(BreakError::OffsetOutOfRange {
            node: container,
            offset: 2,
            len: 1,
        })
    );
    assert_eq!(
        check(&fixture, BreakRange::collapsed(NodeKey(777), 0), body),
        Err(BreakError::UnknownNode(NodeKey(777)))
    );
}

#[test]
fn container_start_without_geometry_is_reported() {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let container = fixture.element(body, "div", block(), None);
    let child = fixture.element(
        container,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, 0.0, 10.0, 10.0)),
    );
    assert_eq!(
        check(&fixture, BreakRange::collapsed(container, 0), body),
        Err(BreakError::MissingGeometry(container))
    );

    fixture
        .snapshot
        .set_rect(container, LayoutRect::from_px(0.0, 0.0, 10.0, 10.0));
    fixture
        .snapshot
        .apply_update(TreeUpdate::RemoveNode { node: child })
        .unwrap();
    let unmeasured = fixture.element(container, "p", block(), None);
    assert_eq!(
        check(&fixture, BreakRange::collapsed(container, 0), body),
        Err(BreakError::MissingGeometry(unmeasured))
    );
}

#[test]
fn position_inside_inline_image_is_never_a_break_point() {
    init_logging();
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let paragraph = fixture.element(
        body,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 100.0)),
    );
    let image = fixture.element(
        paragraph,
        "svg",
        inline(),
        Some(LayoutRect::from_px(0.0, 0.0, 100.0, 100.0)),
    );
    let shape = fixture.element(
        image,
        "g",
        inline(),
        Some(LayoutRect::from_px(0.0, 40.0, 10.0, 10.0)),
    );
    let label = fixture.text(shape, "label", Some(LayoutRect::from_px(0.0, 40.0, 10.0, 10.0)));

    for range in [
        BreakRange::collapsed(image, 0),
        BreakRange::collapsed(image, 1),
        BreakRange::collapsed(shape, 1),
        BreakRange::collapsed(label, 3),
    ] {
        assert_eq!(check(&fixture, range, body), Ok(false), "{range:?}");
    }
    // Between the paragraph's children the image itself is not on the path.
    assert_eq!(check(&fixture, BreakRange::collapsed(paragraph, 1), body), Ok(true));
}

#[test]
fn monolithic_ancestors_block_every_nested_position() {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let scroller = fixture.element(
        body,
        "div",
        styled(Display::Block, Overflow::Scroll),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 300.0)),
    );
    let inner = fixture.element(
        scroller,
        "div",
        block(),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 900.0)),
    );
    let leaf = fixture.element(
        inner,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, 30.0, 800.0, 20.0)),
    );
    fixture.element(leaf, "span", inline(), Some(LayoutRect::from_px(0.0, 30.0, 40.0, 20.0)));

    assert_eq!(check(&fixture, BreakRange::collapsed(inner, 0), body), Ok(false));
    assert_eq!(check(&fixture, BreakRange::collapsed(leaf, 1), body), Ok(false));
}

#[test]
fn walk_stops_before_the_region() {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let scroller = fixture.element(
        body,
        "div",
        styled(Display::Block, Overflow::Auto),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 300.0)),
    );
    let inner = fixture.element(scroller, "div", block(), None);
    fixture.element(inner, "p", block(), None);

    // The scroll container is the fragmentation region itself, so it is not tested.
    assert_eq!(check(&fixture, BreakRange::collapsed(inner, 1), scroller), Ok(true));
    assert_eq!(check(&fixture, BreakRange::collapsed(inner, 1), body), Ok(false));
}

#[test]
fn unrelated_region_walks_to_the_root() {
    let (mut fixture, body, container) = container_with_paragraph(10.0);
    let elsewhere = fixture.element(body, "aside", block(), None);
    assert_eq!(check(&fixture, BreakRange::collapsed(container, 1), elsewhere), Ok(true));

    fixture
        .snapshot
        .set_style(body, styled(Display::Block, Overflow::Auto));
    assert_eq!(check(&fixture, BreakRange::collapsed(container, 1), elsewhere), Ok(false));
}

/// `<p><span>one</span><span>two</span></p>` with the second span starting at `second_top`.
fn adjacent_spans(second_top: f32) -> (Fixture, NodeKey, NodeKey) {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let paragraph = fixture.element(
        body,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, 0.0, 800.0, 40.0)),
    );
    let first = fixture.element(
        paragraph,
        "span",
        inline(),
        Some(LayoutRect::from_px(0.0, 0.0, 30.0, 16.0)),
    );
    fixture.text(first, "one", Some(LayoutRect::from_px(0.0, 0.0, 30.0, 16.0)));
    let second = fixture.element(
        paragraph,
        "span",
        inline(),
        Some(LayoutRect::from_px(30.0, second_top, 30.0, 16.0)),
    );
    fixture.text(second, "two", Some(LayoutRect::from_px(30.0, second_top, 30.0, 16.0)));
    (fixture, body, second)
}

#[test]
fn spans_sharing_a_line_cannot_be_separated() {
    init_logging();
    let (fixture, body, second) = adjacent_spans(0.0);
    let range = BreakRange::collapsed(second, 1);

    assert_eq!(check(&fixture, range, body), Ok(false));

    let legacy = BreakHeuristics::default().without_same_line_detection();
    assert_eq!(
        is_possible_break_point(&fixture.snapshot, &range, body, &legacy),
        Ok(true)
    );
}

#[test]
fn spans_on_consecutive_lines_allow_a_break() {
    let (fixture, body, second) = adjacent_spans(16.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(second, 1), body), Ok(true));
}

#[test]
fn wrapped_span_shares_its_last_line_with_the_next() {
    let (mut fixture, body, second) = adjacent_spans(16.0);
    let first = fixture.snapshot.previous_sibling(second).unwrap();
    fixture.snapshot.set_fragments(
        first,
        vec![
            LayoutRect::from_px(700.0, 0.0, 100.0, 16.0),
            LayoutRect::from_px(0.0, 16.0, 30.0, 16.0),
        ],
    );
    let classifier = BreakClassifier::new(&fixture.snapshot);
    assert!(classifier.are_in_same_single_line(first, second));
    assert!(!classifier.are_in_same_single_line(second, first));
    assert_eq!(
        classifier.is_possible_break_point(&BreakRange::collapsed(second, 1), body),
        Ok(false)
    );
}

#[test]
fn block_siblings_are_never_on_one_line() {
    let (mut fixture, body, container) = container_with_paragraph(10.0);
    let second = fixture.element(
        container,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, 10.0, 800.0, 20.0)),
    );
    fixture.text(second, "next", Some(LayoutRect::from_px(0.0, 15.0, 40.0, 10.0)));
    let first = fixture.snapshot.children(container)[0];
    let classifier = BreakClassifier::new(&fixture.snapshot);
    assert!(!classifier.are_in_same_single_line(first, second));
    assert_eq!(
        classifier.is_possible_break_point(&BreakRange::collapsed(second, 0), body),
        Ok(true)
    );
}

#[test]
fn works_through_a_trait_object() {
    let (fixture, body, container) = container_with_paragraph(10.0);
    let tree: &dyn PresentationTree = &fixture.snapshot;
    assert_eq!(
        is_possible_break_point(
            tree,
            &BreakRange::collapsed(container, 0),
            body,
            &BreakHeuristics::default()
        ),
        Ok(true)
    );
}

/// `<p>` at `first_top` holding two inline-blocks, the second starting at `second_top`.
fn paragraph_with_inline_blocks(first_top: f32, second_top: f32) -> (Fixture, NodeKey, NodeKey) {
    let mut fixture = Fixture::new();
    let body = fixture.body();
    let paragraph = fixture.element(
        body,
        "p",
        block(),
        Some(LayoutRect::from_px(0.0, first_top, 800.0, 80.0)),
    );
    let inline_block = styled(Display::InlineBlock, Overflow::Visible);
    fixture.element(
        paragraph,
        "span",
        inline_block.clone(),
        Some(LayoutRect::from_px(0.0, first_top, 100.0, 40.0)),
    );
    fixture.element(
        paragraph,
        "span",
        inline_block,
        Some(LayoutRect::from_px(100.0, second_top, 100.0, 40.0)),
    );
    (fixture, body, paragraph)
}

#[test]
fn position_between_inline_blocks_on_one_line_is_not_a_break_point() {
    init_logging();
    let (fixture, body, paragraph) = paragraph_with_inline_blocks(0.0, 0.0);
    let children = fixture.snapshot.children(paragraph);
    let classifier = BreakClassifier::new(&fixture.snapshot);
    assert!(classifier.are_in_same_single_line(children[0], children[1]));

    let between = BreakRange::collapsed(paragraph, 1);
    assert_eq!(check(&fixture, between, body), Ok(false));

    let legacy = BreakHeuristics::default().without_same_line_detection();
    assert_eq!(
        is_possible_break_point(&fixture.snapshot, &between, body, &legacy),
        Ok(true)
    );
}

#[test]
fn position_between_inline_blocks_on_separate_lines_is_a_break_point() {
    let (fixture, body, paragraph) = paragraph_with_inline_blocks(0.0, 40.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(paragraph, 1), body), Ok(true));
    assert_eq!(check(&fixture, BreakRange::collapsed(paragraph, 2), body), Ok(true));
}

#[test]
fn geometry_at_the_coordinate_limit_does_not_overflow() {
    let (fixture, body, paragraph) = paragraph_with_inline_blocks(33_554_400.0, 33_554_400.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(paragraph, 1), body), Ok(false));

    let (fixture, body, paragraph) = paragraph_with_inline_blocks(40_000_000.0, 40_000_000.0);
    assert_eq!(check(&fixture, BreakRange::collapsed(paragraph, 1), body), Ok(true));
}

use manga_panels::geometry::{Polygon, ReadingDirection, ReadingTransform};
use manga_panels::views::{merge_cells_iterative, transform_size, OverlapRule, SizeCap};
use manga_panels::{compute_view, PageViewer, Rectangle, Shape};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cell from its left/top/right/bottom edges.
fn ltrb(l: i32, t: i32, r: i32, b: i32) -> Polygon {
    Polygon::rectangle(l, t, r - l, b - t)
}

fn union(cells: &[&Polygon]) -> Rectangle {
    cells
        .iter()
        .map(|c| c.bounding_box())
        .reduce(|a, b| a.union(&b))
        .unwrap()
}

fn cells_viewer(max_width: i32, max_height: i32, cells: &[Polygon]) -> Vec<Rectangle> {
    PageViewer::Cells {
        max_width,
        max_height,
    }
    .compute_view(cells, &ReadingTransform::identity())
    .unwrap()
}

#[test]
fn single_cell_is_its_own_view() {
    init_logging();
    let rect = ltrb(100, 100, 200, 200);
    let views = cells_viewer(200, 200, std::slice::from_ref(&rect));
    assert_eq!(views, vec![rect.bounding_box()]);
}

#[test]
fn no_cells_no_views() {
    init_logging();
    assert!(cells_viewer(200, 200, &[]).is_empty());
}

#[test]
fn overlapping_cells_merge_within_the_cap() {
    init_logging();
    let r1 = ltrb(100, 100, 200, 200);
    let r2 = ltrb(150, 100, 250, 200);
    let views = cells_viewer(250, 250, &[r1.clone(), r2.clone()]);
    assert_eq!(views, vec![union(&[&r1, &r2])]);
}

#[test]
fn cap_keeps_overlapping_cells_apart() {
    init_logging();
    let r1 = ltrb(100, 100, 200, 200);
    let r2 = ltrb(150, 100, 250, 200);
    let views = cells_viewer(100, 100, &[r1.clone(), r2.clone()]);
    assert_eq!(views, vec![r1.bounding_box(), r2.bounding_box()]);
}

#[test]
fn touching_cells_do_not_merge() {
    init_logging();
    let r1 = ltrb(100, 100, 200, 200);
    let r2 = ltrb(200, 100, 250, 200);
    let views = cells_viewer(250, 250, &[r1.clone(), r2.clone()]);
    assert_eq!(views, vec![r1.bounding_box(), r2.bounding_box()]);
}

#[test]
fn strip_viewer_merges_rows() {
    init_logging();
    let r1 = ltrb(100, 100, 200, 200);
    let r2 = ltrb(230, 100, 300, 180);
    let r3 = ltrb(310, 120, 400, 220);
    let r4 = ltrb(100, 220, 300, 340);
    let r5 = ltrb(330, 220, 400, 330);
    let cells = vec![r1.clone(), r2.clone(), r3.clone(), r4.clone(), r5.clone()];

    let views = PageViewer::Strip {
        max_width: 2000,
        max_height: 2000,
    }
    .compute_view(&cells, &ReadingTransform::identity())
    .unwrap();

    assert_eq!(views, vec![union(&[&r1, &r2, &r3]), union(&[&r4, &r5])]);
}

#[test]
fn strip_viewer_without_cells_has_no_views() {
    init_logging();
    for max_width in [-1, 400] {
        let views = PageViewer::Strip {
            max_width,
            max_height: -1,
        }
        .compute_view::<Polygon>(&[], &ReadingTransform::identity())
        .unwrap();
        assert!(views.is_empty());
    }
}

#[test]
fn full_page_viewer_needs_cells() {
    init_logging();
    let viewer = PageViewer::FullPage;
    assert!(viewer
        .compute_view::<Polygon>(&[], &ReadingTransform::identity())
        .is_err());
    let cells = vec![ltrb(10, 10, 50, 50), ltrb(60, 70, 90, 120)];
    let views = viewer
        .compute_view(&cells, &ReadingTransform::identity())
        .unwrap();
    assert_eq!(views, vec![Rectangle::from_ltrb(10, 10, 90, 120)]);
}

#[test]
fn cap_follows_the_reading_transform() {
    init_logging();
    // Union is 150 wide and 200 tall.
    let cells = [ltrb(0, 0, 100, 200), ltrb(50, 0, 150, 200)];

    let identity = ReadingTransform::identity();
    assert_eq!(compute_view(&cells, 250, 160, &identity).len(), 2);

    // A quarter turn swaps the cap to 160x250.
    let turned = ReadingTransform::for_direction(ReadingDirection::RightDown);
    let size = transform_size(250, 160, &turned);
    assert_eq!((size.width, size.height), (160, 250));
    assert_eq!(compute_view(&cells, 250, 160, &turned).len(), 1);
}

#[test]
fn merge_records_contributors() {
    init_logging();
    let boxes = [
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(10, 10, 100, 100),
        Rectangle::new(500, 0, 100, 100),
    ];
    let merged = merge_cells_iterative(&boxes, OverlapRule::Cells, &SizeCap::UNBOUNDED);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].rect, Rectangle::new(0, 0, 110, 110));
    assert_eq!(merged[0].contributors, boxes[..2].to_vec());
    assert_eq!(merged[1].contributors, vec![boxes[2]]);
}

mod common;

use common::synthetic_page::{
    framed_page, inverted_page, mask_from_ascii, GRID_2X2, PAGE_H, PAGE_W,
};
use manga_panels::binarize::{Binarizer, ThresholdBinarizer};
use manga_panels::blobs::{build_hull, extract_blobs};
use manga_panels::image::{BinaryMask, ImageU8};
use manga_panels::{PageAnalyzer, PageViewer, PanelError, ReadingDirection, Rectangle, Shape};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn panel_boxes(page: &manga_panels::Page) -> Vec<Rectangle> {
    page.cells.iter().map(|c| c.bounding_box()).collect()
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn analyzed_pages_can_be_shared_between_threads() {
    assert_send_sync::<manga_panels::Page>();
    assert_send_sync::<manga_panels::Polygon>();
}

#[test]
fn framed_grid_page_yields_four_ordered_cells() {
    init_logging();
    let buffer = framed_page(PAGE_W, PAGE_H, &GRID_2X2, 3);
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();

    let page = PageAnalyzer::default()
        .analyze(&image, ReadingDirection::DownRight)
        .unwrap();

    assert!(!page.full_page);
    assert_eq!(
        panel_boxes(&page),
        vec![
            Rectangle::new(20, 20, 170, 270),
            Rectangle::new(210, 20, 170, 270),
            Rectangle::new(20, 310, 170, 270),
            Rectangle::new(210, 310, 170, 270),
        ]
    );
}

#[test]
fn right_to_left_pages_start_top_right() {
    init_logging();
    let buffer = framed_page(PAGE_W, PAGE_H, &GRID_2X2, 3);
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();

    let page = PageAnalyzer::default()
        .analyze(&image, ReadingDirection::DownLeft)
        .unwrap();

    let xs: Vec<(i32, i32)> = panel_boxes(&page).iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(xs, vec![(210, 20), (20, 20), (210, 310), (20, 310)]);
}

#[test]
fn light_panels_on_black_page_are_found() {
    init_logging();
    let buffer = inverted_page(PAGE_W, PAGE_H, &GRID_2X2);
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();

    let report = PageAnalyzer::default()
        .analyze_with_diagnostics(&image, ReadingDirection::DownRight)
        .unwrap();

    assert!(report.trace.segmentation.inverted);
    assert_eq!(report.page.cells.len(), 4);
    assert_eq!(
        report.page.cells[0].bounding_box(),
        Rectangle::new(20, 20, 170, 270)
    );
}

#[test]
fn blank_page_is_shown_whole() {
    init_logging();
    let buffer = vec![255u8; PAGE_W * PAGE_H];
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();

    let report = PageAnalyzer::default()
        .analyze_with_diagnostics(&image, ReadingDirection::DownRight)
        .unwrap();

    assert!(report.page.full_page);
    assert_eq!(
        panel_boxes(&report.page),
        vec![Rectangle::new(0, 0, PAGE_W as i32, PAGE_H as i32)]
    );
    assert!(report.trace.reading.is_none());

    let views = report.page.compute_view(&PageViewer::FullPage).unwrap();
    assert_eq!(views, vec![Rectangle::new(0, 0, PAGE_W as i32, PAGE_H as i32)]);
}

#[test]
fn strip_views_map_back_to_page_coordinates() {
    init_logging();
    let buffer = framed_page(PAGE_W, PAGE_H, &GRID_2X2, 3);
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();

    let page = PageAnalyzer::default()
        .analyze(&image, ReadingDirection::DownLeft)
        .unwrap();
    let views = page
        .compute_view(&PageViewer::Strip {
            max_width: -1,
            max_height: -1,
        })
        .unwrap();

    assert_eq!(
        views,
        vec![
            Rectangle::new(20, 20, 360, 270),
            Rectangle::new(20, 310, 360, 270),
        ]
    );
}

#[test]
fn diagnostics_serialize_to_camel_case_json() {
    init_logging();
    let buffer = framed_page(PAGE_W, PAGE_H, &GRID_2X2, 3);
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();

    let report = PageAnalyzer::default()
        .analyze_with_diagnostics(&image, ReadingDirection::DownRight)
        .unwrap()
        .with_views(&PageViewer::Cells {
            max_width: -1,
            max_height: -1,
        })
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["page"]["cells"].as_array().map(|a| a.len()), Some(4));
    assert!(json["page"]["cells"][0]["boundingBox"].is_object());
    assert!(json["page"]["cells"][0]["centerOfGravity"].is_object());
    assert_eq!(json["trace"]["input"]["width"], 400);
    assert_eq!(json["trace"]["reading"]["order"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["trace"]["views"]["rects"].as_array().map(|a| a.len()), Some(4));
    assert!(report.trace.timings.stage("segmentation.binarize").is_some());
    assert!(report.trace.timings.stage("views").is_some());
}

#[test]
fn ascii_outline_becomes_one_convex_cell() {
    init_logging();
    let mask = mask_from_ascii(&[
        "..........",
        ".######...",
        ".#....#...",
        ".#....###.",
        ".#......#.",
        ".########.",
        "..........",
    ]);
    let blobs = extract_blobs(&mask).unwrap();
    assert_eq!(blobs.len(), 1);

    let hull = build_hull(&blobs[0]).unwrap();
    assert_eq!(hull.bounding_box(), Rectangle::new(1, 1, 8, 5));
    assert!(hull.contains_point(manga_panels::geometry::Point::new(4, 3)));
}

#[test]
fn precomputed_mask_gives_the_same_cells() {
    init_logging();
    let buffer = framed_page(PAGE_W, PAGE_H, &GRID_2X2, 3);
    let image = ImageU8::try_new(PAGE_W, PAGE_H, PAGE_W, &buffer).unwrap();
    let analyzer = PageAnalyzer::default();
    let mask = analyzer.binarize(&image);
    assert_eq!(mask, ThresholdBinarizer::default().binarize(&image));

    let from_mask = analyzer
        .analyze_mask(&mask, &image, ReadingDirection::DownRight)
        .unwrap();
    let from_gray = analyzer
        .analyze(&image, ReadingDirection::DownRight)
        .unwrap();
    assert_eq!(from_mask.cells, from_gray.cells);

    let small = BinaryMask::new(10, 10);
    assert!(matches!(
        analyzer.analyze_mask(&small, &image, ReadingDirection::DownRight),
        Err(PanelError::Format(_))
    ));
}

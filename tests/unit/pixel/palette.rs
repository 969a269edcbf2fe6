use super::*;

#[test]
fn rejects_empty_and_oversized_palettes() {
    assert!(Palette::new(vec![]).is_err());
    assert!(Palette::new(vec![ColorRecord::default(); 257]).is_err());
    assert!(Palette::new(vec![ColorRecord::default(); 256]).is_ok());
    assert!(Palette::greyscale(0).is_err());
}

#[test]
fn greyscale_256_reaches_white() {
    let p = Palette::greyscale(256).unwrap();
    assert_eq!(p.len(), 256);
    assert_eq!(p.get(0), ColorRecord::rgb(0, 0, 0));
    assert_eq!(p.get(255), ColorRecord::rgb(255, 255, 255));
    assert_eq!(p.get(128), ColorRecord::rgb(128, 128, 128));
}

#[test]
fn gradation_rounds_steps_up() {
    let p = Palette::gradation(ColorRecord::rgb(0, 0, 0), ColorRecord::rgb(10, 0, 0), 4).unwrap();
    let reds: Vec<u8> = p.colors().iter().map(|c| c.r).collect();
    assert_eq!(reds, vec![0, 3, 5, 8]);
}

#[test]
fn gradation_can_descend() {
    let p = Palette::gradation(ColorRecord::rgb(200, 0, 0), ColorRecord::rgb(0, 0, 0), 2).unwrap();
    assert_eq!(p.get(0).r, 200);
    assert_eq!(p.get(1).r, 100);
}

#[test]
fn out_of_range_index_reads_black() {
    let p = Palette::greyscale(4).unwrap();
    assert_eq!(p.get(200), ColorRecord::rgb(0, 0, 0));
}

#[test]
fn nearest_index_prefers_exact_then_lowest() {
    let p = Palette::new(vec![
        ColorRecord::rgb(0, 0, 0),
        ColorRecord::rgb(100, 100, 100),
        ColorRecord::rgb(100, 100, 100),
        ColorRecord::rgb(255, 255, 255),
    ])
    .unwrap();
    assert_eq!(p.nearest_index(ColorRecord::rgb(100, 100, 100)), 1);
    assert_eq!(p.nearest_index(ColorRecord::rgb(90, 95, 110)), 1);
    assert_eq!(p.nearest_index(ColorRecord::rgb(250, 240, 255)), 3);
    assert_eq!(p.nearest_index(ColorRecord::rgba(0, 0, 0, 0)), 0);
}

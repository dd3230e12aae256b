use super::*;

#[test]
fn opaque_and_transparent_sources_short_circuit() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over_straight(dst, [200, 100, 50, 255]), [200, 100, 50, 255]);
    assert_eq!(over_straight(dst, [200, 100, 50, 0]), dst);
}

#[test]
fn half_white_over_black_is_mid_grey() {
    assert_eq!(over_straight([0, 0, 0, 255], [255, 255, 255, 128]), [128, 128, 128, 255]);
}

#[test]
fn half_white_over_nothing_stays_straight_white() {
    assert_eq!(over_straight([0, 0, 0, 0], [255, 255, 255, 128]), [255, 255, 255, 128]);
}

#[test]
fn premul_overlay_in_place() {
    let mut dst = vec![255, 0, 0, 255, 255, 0, 0, 255];
    let overlay = vec![255, 255, 255, 255, 0, 0, 0, 0];
    over_premul_in_place(&mut dst, &overlay).unwrap();
    assert_eq!(dst, vec![255, 255, 255, 255, 255, 0, 0, 255]);

    assert!(over_premul_in_place(&mut dst, &overlay[..4]).is_err());
}

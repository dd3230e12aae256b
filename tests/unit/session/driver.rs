use super::*;
use crate::text::painter::TextPainter;

fn driver() -> RenderDriver {
    RenderDriver::new(Renderer::new(TextPainter::new(None)))
}

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn single_submission_commits() {
    let d = driver();
    assert!(d.latest().is_none());
    let pending = d.submit(RenderRequest {
        image: ImageInput::Encoded(png_bytes(40, 20, [200, 0, 0, 255])),
        ..RenderRequest::default()
    });
    assert_eq!(pending.generation(), 1);
    let outcome = pending.wait().unwrap();
    let frame = outcome.frame().expect("committed").clone();
    assert_eq!(frame.pixel(400, 300), Some([200, 0, 0, 255]));
    assert!(Arc::ptr_eq(&d.latest().unwrap(), &frame));
}

#[test]
fn older_render_never_overwrites_newer() {
    let d = driver();
    let (a, b) = {
        // Park both workers on the commit slot until both are submitted.
        let _slot = d.latest.lock().unwrap();
        let a = d.submit(RenderRequest {
            image: ImageInput::Encoded(png_bytes(8, 8, [255, 0, 0, 255])),
            ..RenderRequest::default()
        });
        let b = d.submit(RenderRequest {
            image: ImageInput::Encoded(png_bytes(8, 8, [0, 0, 255, 255])),
            ..RenderRequest::default()
        });
        (a, b)
    };

    let b = b.wait().unwrap();
    let a = a.wait().unwrap();
    assert!(matches!(a, RenderOutcome::Superseded));
    let newest = b.frame().expect("newest commits").clone();
    assert_eq!(newest.pixel(400, 300), Some([0, 0, 255, 255]));
    assert!(Arc::ptr_eq(&d.latest().unwrap(), &newest));
    assert_eq!(d.generation(), 2);
}

#[test]
fn decode_failure_commits_nothing() {
    let d = driver();
    let err = d
        .submit(RenderRequest {
            image: ImageInput::Encoded(b"not an image".to_vec()),
            ..RenderRequest::default()
        })
        .wait()
        .unwrap_err();
    assert!(err.to_string().contains("decode"));
    assert!(d.latest().is_none());
}

#[test]
fn placeholder_request_commits_gradient() {
    let d = driver();
    let out = d.submit(RenderRequest::default()).wait().unwrap();
    let frame = out.frame().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0x1a, 0x1a, 0x1a, 255]));
}

#[test]
fn stale_decode_failure_is_superseded_not_an_error() {
    let d = driver();
    let (stale, fresh) = {
        // Workers check their generation under the renderer lock.
        let _renderer = d.renderer.lock().unwrap();
        let stale = d.submit(RenderRequest {
            image: ImageInput::Encoded(b"not an image".to_vec()),
            ..RenderRequest::default()
        });
        let fresh = d.submit(RenderRequest::default());
        (stale, fresh)
    };

    assert!(matches!(stale.wait().unwrap(), RenderOutcome::Superseded));
    assert!(fresh.wait().unwrap().frame().is_some());
}

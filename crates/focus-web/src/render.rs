use crate::dom;
use crate::favicon::Favicon;
use focus_core::{ClockFace, DialFrame};
use web_sys as web;

const FACE_INK: &str = "#1f2937";
const LABEL_FONT_SIZE: &str = "7";

/// DOM targets for one dial.
pub struct DialView {
    pub svg: web::Element,
    pub wedge: web::Element,
    pub readout: Option<web::Element>,
    pub favicon: Option<Favicon>,
}

/// Rebuild tick marks and minute labels inside `group`.
pub fn draw_face(
    document: &web::Document,
    group: &web::Element,
    face: &ClockFace,
) -> anyhow::Result<()> {
    group.set_inner_html("");

    for tick in face.ticks() {
        let line = dom::create_svg(document, "line")?;
        dom::set_attrs(
            &line,
            &[
                ("x1", tick.inner.x.to_string()),
                ("y1", tick.inner.y.to_string()),
                ("x2", tick.outer.x.to_string()),
                ("y2", tick.outer.y.to_string()),
                ("stroke", FACE_INK.to_string()),
                ("stroke-width", tick.stroke_width.to_string()),
                ("stroke-linecap", "round".to_string()),
            ],
        );
        group
            .append_child(&line)
            .map_err(|e| anyhow::anyhow!("append tick: {:?}", e))?;
    }

    for label in face.labels() {
        let text = dom::create_svg(document, "text")?;
        dom::set_attrs(
            &text,
            &[
                ("x", label.position.x.to_string()),
                ("y", label.position.y.to_string()),
                ("text-anchor", "middle".to_string()),
                ("dominant-baseline", "middle".to_string()),
                ("font-size", LABEL_FONT_SIZE.to_string()),
                ("font-weight", "800".to_string()),
                ("fill", FACE_INK.to_string()),
            ],
        );
        text.set_text_content(Some(&label.minutes.to_string()));
        group
            .append_child(&text)
            .map_err(|e| anyhow::anyhow!("append label: {:?}", e))?;
    }
    Ok(())
}

/// Paint a frame: wedge path, digital readout, page title and favicon.
pub fn apply_frame(document: &web::Document, view: &DialView, frame: &DialFrame) {
    _ = view.wedge.set_attribute("d", &frame.wedge.svg_path());
    if let Some(readout) = &view.readout {
        readout.set_text_content(Some(&frame.readout));
    }
    if frame.seconds > 0 {
        document.set_title(&format!("{} - Focus", frame.readout));
    } else {
        document.set_title("Focus");
    }
    if let Some(favicon) = &view.favicon {
        favicon.draw(&frame.indicator);
    }
}

use web_sys as web;

pub const FINISHED_CHIME: &str = "https://www.soundjay.com/buttons/sounds/beep-07.mp3";
pub const COMPLETED_CHIME: &str = "https://www.soundjay.com/buttons/sounds/button-3.mp3";

/// Fire-and-forget playback. Autoplay rejections are logged, not surfaced.
pub fn play(src: &str) {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(el) => {
            if let Err(e) = el.play() {
                log::warn!("[audio] play {} failed: {:?}", src, e);
            }
        }
        Err(e) => log::warn!("[audio] HtmlAudioElement error: {:?}", e),
    }
}

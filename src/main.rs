use std::path::Path;
use std::time::Duration;

use fluid_slider::{
    MonospaceLabel, Options, PointerEvent, SliderController, SliderEvent,
    Step, TweenAnimator,
};
use glam::Vec2;

const BOUNDS: Vec2 = Vec2::new(300.0, 40.0);
const SWEEP_STEPS: u32 = 12;
const FRAME: Duration = Duration::from_millis(40);

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        let mut options = Options::default();
        options.range.maximum = 1000.0;
        options.range.step = Step::Fixed(1.0);
        return options;
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from {path}");
            options
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn report(slider: &SliderController, event: SliderEvent) {
    match event {
        SliderEvent::EditingBegan => log::info!("Slider started moving"),
        SliderEvent::ValueChanged { value } => {
            log::info!("Slider changed value: {value}");
        }
        SliderEvent::EditingEnded => {
            log::info!("Slider stopped moving at {}", slider.value());
        }
    }
}

fn dispatch(slider: &mut SliderController, event: PointerEvent) {
    if let Some(notification) = slider.handle_event(event) {
        report(slider, notification);
    }
    let frame = slider.presented_thumb_frame();
    log::debug!(
        "thumb at ({:.1}, {:.1}) {:.1} wide, label {}",
        frame.origin.x,
        frame.origin.y,
        frame.width(),
        slider.label_text()
    );
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = load_options();
    let label = MonospaceLabel::new(options.style.font_size);
    let mut slider: SliderController =
        match SliderController::from_options(&options, label, TweenAnimator::new()) {
            Ok(slider) => slider,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        };
    slider.set_bounds(BOUNDS);

    let style = slider.style();
    log::debug!(
        "colors: background {:?}, track {:?}, thumb {:?}, label {:?}",
        style.background_color,
        style.track_color,
        style.thumb_color,
        style.label_color
    );

    let thumb = slider.thumb_frame();
    let track = slider.track_frame();

    // Just below the thumb: inside the control but not a hit.
    let miss = Vec2::new(thumb.center().x, thumb.max().y + 1.0);
    dispatch(&mut slider, PointerEvent::Down { position: miss });

    dispatch(&mut slider, PointerEvent::Down { position: thumb.center() });

    let start = thumb.center().x;
    let end = track.max().x;
    for i in 1..=SWEEP_STEPS {
        let t = i as f32 / SWEEP_STEPS as f32;
        let position = Vec2::new(start + (end - start) * t, thumb.center().y);
        dispatch(&mut slider, PointerEvent::Moved { position });
        std::thread::sleep(FRAME);
    }

    let back = Vec2::new((start + end) / 2.0, thumb.center().y);
    dispatch(&mut slider, PointerEvent::Moved { position: back });
    dispatch(&mut slider, PointerEvent::Up { position: back });

    while slider.animator().is_animating(web_time::Instant::now()) {
        std::thread::sleep(FRAME);
        let frame = slider.presented_thumb_frame();
        log::debug!("settling: thumb top at {:.1}", frame.origin.y);
    }
    slider.animator_mut().prune(web_time::Instant::now());

    log::info!("Final value: {}", slider.value());
}

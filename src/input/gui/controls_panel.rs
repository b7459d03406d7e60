use crate::controllers::engine::Engine;
use crate::controllers::engine::commands::{EngineCommand, GradientEdit, SettingEdit};
use crate::core::colour::rgb::Rgb;
use crate::core::settings::render_settings::{
    MAX_SAMPLES_PER_PIXEL, MAX_SHAPING_EXPONENT, RenderSettings,
};
use crate::core::settings::sampling_method::SamplingMethod;
use crate::core::viewport::fractal_mode::FractalMode;

const MAX_ITERATIONS_SLIDER: u32 = 10_000;

/// Copy of everything the controls panel displays, taken once per UI frame.
///
/// The panel edits this copy and reports differences as commands; it never
/// mutates the engine directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub mode: FractalMode,
    pub settings: RenderSettings,
    pub stops: Vec<Rgb>,
    pub max_stops: usize,
    pub frames_sampled: u32,
}

impl ControlsView {
    #[must_use]
    pub fn from_engine(engine: &Engine) -> Self {
        Self {
            mode: engine.viewport().mode(),
            settings: engine.settings().clone(),
            stops: engine.gradient().stops().to_vec(),
            max_stops: engine.gradient().max_size(),
            frames_sampled: engine.accumulation().frame_count(),
        }
    }
}

pub fn controls_panel(ui: &mut egui::Ui, view: &ControlsView) -> Vec<EngineCommand> {
    let mut commands = Vec::new();
    let settings = &view.settings;

    ui.label(format!("Frames sampled: {}", view.frames_sampled));
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Fractal:");
        let mut mode = view.mode;
        egui::ComboBox::from_id_source("fractal_mode")
            .selected_text(mode.display_name())
            .show_ui(ui, |ui| {
                for &kind in FractalMode::ALL {
                    ui.selectable_value(&mut mode, kind, kind.display_name());
                }
            });
        if mode != view.mode {
            commands.push(EngineCommand::SetMode(mode));
        }
    });

    if ui.button("Reset view").clicked() {
        commands.push(EngineCommand::ResetView);
    }

    ui.separator();

    let mut toggle = |ui: &mut egui::Ui, current: bool, text: &str, edit: fn(bool) -> SettingEdit| {
        let mut value = current;
        if ui.checkbox(&mut value, text).changed() && value != current {
            commands.push(edit(value).into());
        }
    };

    toggle(ui, settings.temporal(), "Temporal anti-aliasing", SettingEdit::Temporal);
    if !settings.temporal() {
        toggle(ui, settings.pixel_sampling(), "Pixel sampling", SettingEdit::PixelSampling);
    }
    toggle(ui, settings.gamma_correction(), "Gamma correction", SettingEdit::GammaCorrection);
    toggle(ui, settings.smooth_colouring(), "Smooth colouring", SettingEdit::SmoothColouring);
    toggle(ui, settings.test(), "Test", SettingEdit::Test);

    if settings.pixel_sampling() {
        ui.separator();
        ui.label("Sampling method:");
        let mut method = settings.sampling_method();
        for &kind in SamplingMethod::ALL {
            if settings.temporal() && !kind.supports_temporal() {
                continue;
            }
            ui.radio_value(&mut method, kind, kind.display_name());
        }
        if method != settings.sampling_method() {
            commands.push(SettingEdit::SamplingMethod(method).into());
        }

        let mut samples = settings.samples_per_pixel();
        ui.add(
            egui::Slider::new(&mut samples, 1..=MAX_SAMPLES_PER_PIXEL)
                .text("Samples")
                .suffix(method.samples_suffix()),
        );
        if samples != settings.samples_per_pixel() {
            commands.push(SettingEdit::SamplesPerPixel(samples).into());
        }
    }

    ui.separator();

    let mut iterations = settings.max_iterations();
    ui.add(
        egui::Slider::new(&mut iterations, 1..=MAX_ITERATIONS_SLIDER)
            .logarithmic(true)
            .text("Max iterations"),
    );
    if iterations != settings.max_iterations() {
        commands.push(SettingEdit::MaxIterations(iterations).into());
    }

    let mut exponent = settings.shaping_exponent();
    ui.add(egui::Slider::new(&mut exponent, 0.0..=MAX_SHAPING_EXPONENT).text("Gradient exponent"));
    if exponent != settings.shaping_exponent() {
        commands.push(SettingEdit::ShapingExponent(exponent).into());
    }

    ui.separator();
    ui.label("Gradient:");

    let last = view.stops.len().saturating_sub(1);
    let can_remove = view.stops.len() > 2;
    for (index, stop) in view.stops.iter().enumerate() {
        ui.horizontal(|ui| {
            let mut rgb = stop.to_array();
            if ui.color_edit_button_rgb(&mut rgb).changed() {
                commands.push(
                    GradientEdit::Set {
                        index,
                        colour: Rgb::from_array(rgb),
                    }
                    .into(),
                );
            }
            if ui.add_enabled(index > 0, egui::Button::new("^")).clicked() {
                commands.push(GradientEdit::SwapBackward(index).into());
            }
            if ui.add_enabled(index < last, egui::Button::new("v")).clicked() {
                commands.push(GradientEdit::SwapForward(index).into());
            }
            if ui.add_enabled(can_remove, egui::Button::new("x")).clicked() {
                commands.push(GradientEdit::Remove(index).into());
            }
        });
    }

    let can_add = view.stops.len() < view.max_stops;
    if ui.add_enabled(can_add, egui::Button::new("Add stop")).clicked() {
        let colour = view.stops.last().copied().unwrap_or(Rgb::WHITE);
        commands.push(GradientEdit::Insert(colour).into());
    }

    commands
}

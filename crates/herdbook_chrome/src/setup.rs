use eframe::NativeOptions;

pub fn generate_native_options() -> NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Herdbook")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    }
}

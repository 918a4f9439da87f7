use eframe::egui;

pub const ONLINE: egui::Color32 = egui::Color32::from_rgb(0x22, 0xC5, 0x5E);
const FILL: egui::Color32 = egui::Color32::from_rgb(0x3A, 0x44, 0x55);

/// Avatar tròn với chữ cái đầu; đường dẫn ảnh placeholder không bao giờ được tải.
pub fn render(ui: &mut egui::Ui, initials: &str, size: f32, online: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();
    let radius = size / 2.0;

    painter.circle_filled(rect.center(), radius, FILL);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(size * 0.4),
        egui::Color32::WHITE,
    );

    if online {
        let dot = rect.right_bottom() - egui::vec2(radius * 0.3, radius * 0.3);
        painter.circle(
            dot,
            radius * 0.3,
            ONLINE,
            egui::Stroke::new(2.0, ui.visuals().panel_fill),
        );
    }

    response
}

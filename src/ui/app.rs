use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;

use crate::dialog;
use crate::dispatch::{Dispatcher, MenuItem};
use crate::dom::{ImageData, NodeId};
use crate::fetch::HttpSizeFetcher;
use crate::session::{ImageStyleState, RenderMode, SessionContext};
use crate::transform::{self, CommandSource, leading_number};

const PAGE_TAB: u64 = 1;
const PAGE_URL: &str = "http://localhost/page";

pub struct ImageControlApp {
    session: SessionContext,
    dispatcher: Dispatcher,
    fetcher: HttpSizeFetcher,
    /// Root of the page surface holding one figure per loaded image.
    page: NodeId,
    /// Decoded pixels keyed by source, shared between a page image and its
    /// dialog clone.
    pixels: HashMap<String, egui::ColorImage>,
    textures: HashMap<(String, bool), egui::TextureHandle>,
}

impl ImageControlApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, inputs: Vec<PathBuf>) -> Self {
        let mut session = SessionContext::new();
        let page = session.document.create_element("body");
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_tab(PAGE_TAB, PAGE_URL);
        dispatcher.activate(PAGE_TAB);

        let mut app = Self {
            session,
            dispatcher,
            fetcher: HttpSizeFetcher,
            page,
            pixels: HashMap::new(),
            textures: HashMap::new(),
        };
        for input in inputs {
            app.load_path(&input);
        }
        app
    }

    fn load_path(&mut self, path: &Path) {
        let decoded = match image::open(path) {
            Ok(decoded) => decoded.to_rgba8(),
            Err(error) => {
                log::warn!("could not load {}: {error}", path.display());
                return;
            }
        };
        let (width, height) = decoded.dimensions();
        let src = path.display().to_string();
        self.pixels.insert(
            src.clone(),
            egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                decoded.as_raw(),
            ),
        );

        let data = ImageData {
            src,
            alt: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            srcset: String::new(),
            natural_width: width,
            natural_height: height,
            complete: true,
        };
        let figure = self.session.document.create_element("figure");
        let image = self.session.document.create_image(data);
        self.session.document.append_child(self.page, figure);
        self.session.document.append_child(figure, image);
    }

    fn state_for(&self, image: NodeId) -> ImageStyleState {
        self.session
            .store
            .get(image)
            .cloned()
            .unwrap_or_default()
    }

    fn texture_id(&mut self, ctx: &egui::Context, src: &str, mode: RenderMode) -> Option<egui::TextureId> {
        let nearest = matches!(mode, RenderMode::Pixelated | RenderMode::CrispEdges);
        let key = (src.to_string(), nearest);
        if let Some(texture) = self.textures.get(&key) {
            return Some(texture.id());
        }
        let pixels = self.pixels.get(src)?.clone();
        let options = if nearest {
            egui::TextureOptions::NEAREST
        } else {
            egui::TextureOptions::LINEAR
        };
        let texture = ctx.load_texture(format!("{src}#{nearest}"), pixels, options);
        let id = texture.id();
        self.textures.insert(key, texture);
        Some(id)
    }

    fn dispatch_command(&mut self, menu_item_id: &str) {
        if let Some(message) = self.dispatcher.click(menu_item_id) {
            let acknowledged = self.session.on_message(&message, &self.fetcher);
            if !acknowledged {
                log::debug!("command {} was not applied", message.menu_item_id);
            }
        }
    }

    fn page_images(&self) -> Vec<NodeId> {
        self.session.document.descendant_images(self.page)
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let images = self.page_images();
        let mut picked: Option<String> = None;
        let mut right_clicked: Option<NodeId> = None;

        // Widget descriptions are computed up front so the paint loop does
        // not fight the session borrow.
        struct PageEntry {
            node: NodeId,
            texture: egui::TextureId,
            size: egui::Vec2,
            angle: f32,
            reverse: bool,
        }
        let mut entries = Vec::new();
        for node in images {
            let Some(data) = self.session.document.image(node).cloned() else {
                continue;
            };
            let state = self.state_for(node);
            let Some(texture) = self.texture_id(ctx, &data.src, state.render) else {
                continue;
            };
            let factor = if state.scale.is_finite() {
                (state.scale / 100.0).max(0.0) as f32
            } else {
                1.0
            };
            entries.push(PageEntry {
                node,
                texture,
                size: egui::vec2(
                    data.natural_width as f32 * factor,
                    data.natural_height as f32 * factor,
                ),
                angle: leading_number(&state.rotate) as f32,
                reverse: state.reverse,
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .id_salt("page-surface")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for entry in &entries {
                            let mut widget = egui::Image::new((entry.texture, entry.size))
                                .rotate(entry.angle.to_radians(), egui::Vec2::splat(0.5));
                            if entry.reverse {
                                widget = widget.uv(egui::Rect::from_min_max(
                                    egui::pos2(1.0, 0.0),
                                    egui::pos2(0.0, 1.0),
                                ));
                            }
                            let response =
                                ui.add(widget).interact(egui::Sense::click_and_drag());
                            if response.secondary_clicked() {
                                right_clicked = Some(entry.node);
                            }
                            response.context_menu(|ui| {
                                menu_items(ui, self.dispatcher.menu(), &mut picked);
                            });
                        }
                    });
                });
        });

        if let Some(target) = right_clicked {
            self.session.on_context_click(target);
        }
        if let Some(menu_item_id) = picked {
            self.dispatch_command(&menu_item_id);
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        if !self.session.dialog.open {
            return;
        }
        let Some(subject) = self.session.dialog.subject else {
            return;
        };
        let Some(data) = self.session.document.image(subject).cloned() else {
            return;
        };
        let state = self.state_for(subject);
        let Some(texture) = self.texture_id(ctx, &data.src, state.render) else {
            return;
        };
        let rows = self.session.dialog.metadata.clone();

        let mut keep_open = true;
        let mut commands: Vec<String> = Vec::new();
        let mut right_clicked_space = false;
        let mut picked: Option<String> = None;

        egui::Window::new("Image inspection")
            .open(&mut keep_open)
            .default_size([960.0, 700.0])
            .resizable(true)
            .show(ctx, |ui| {
                egui::Grid::new("inspection-metadata")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for row in &rows {
                            ui.label(&row.label);
                            ui.label(&row.value);
                            ui.end_row();
                        }
                    });
                ui.separator();

                ui.horizontal(|ui| {
                    let mut scale = state.scale;
                    ui.label("Scale");
                    if ui
                        .add(egui::DragValue::new(&mut scale).speed(1.0).suffix("%"))
                        .changed()
                    {
                        commands.push(format!("{scale}%"));
                    }

                    let mut angle = leading_number(&state.rotate);
                    ui.label("Rotate");
                    if ui
                        .add(egui::DragValue::new(&mut angle).speed(1.0).suffix("°"))
                        .changed()
                    {
                        commands.push(format!("{angle}deg"));
                    }

                    let mut reverse = state.reverse;
                    if ui.checkbox(&mut reverse, "Reverse").changed() {
                        commands.push("reverse".to_string());
                    }

                    let mut mode = state.render;
                    egui::ComboBox::from_id_salt("render-mode")
                        .selected_text(mode.as_str())
                        .show_ui(ui, |ui| {
                            for candidate in RenderMode::ALL {
                                ui.selectable_value(&mut mode, candidate, candidate.as_str());
                            }
                        });
                    if mode != state.render {
                        commands.push(format!("render:{}", mode.as_str()));
                    }
                });
                ui.separator();

                let avail = ui.available_size();
                let view = egui::vec2(avail.x.max(200.0), avail.y.max(200.0));
                self.session.dialog.viewport = (f64::from(view.x), f64::from(view.y));
                let space = dialog::space_size(&self.session)
                    .unwrap_or((f64::from(view.x), f64::from(view.y)));

                let factor = if state.scale.is_finite() {
                    (state.scale / 100.0).max(0.0) as f32
                } else {
                    1.0
                };
                let size = egui::vec2(
                    data.natural_width as f32 * factor,
                    data.natural_height as f32 * factor,
                );
                let angle = leading_number(&state.rotate) as f32;
                let reverse = state.reverse;

                let mut area = egui::ScrollArea::both()
                    .id_salt("inspection-viewport")
                    .max_height(view.y)
                    .auto_shrink([false, false]);
                if self.session.dialog.scroll_dirty {
                    area = area.scroll_offset(egui::vec2(
                        self.session.dialog.scroll.0 as f32,
                        self.session.dialog.scroll.1 as f32,
                    ));
                    self.session.dialog.scroll_dirty = false;
                }

                let output = area.show(ui, |ui| {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(space.0 as f32, space.1 as f32),
                        egui::Sense::click_and_drag(),
                    );
                    let mut widget = egui::Image::new((texture, size))
                        .rotate(angle.to_radians(), egui::Vec2::splat(0.5));
                    if reverse {
                        widget = widget.uv(egui::Rect::from_min_max(
                            egui::pos2(1.0, 0.0),
                            egui::pos2(0.0, 1.0),
                        ));
                    }
                    widget.paint_at(ui, egui::Rect::from_center_size(rect.center(), size));
                    response
                });

                let response = output.inner;
                self.session.dialog.scroll = (
                    f64::from(output.state.offset.x),
                    f64::from(output.state.offset.y),
                );

                if response.dragged() {
                    let delta = response.drag_delta();
                    dialog::pan(
                        &mut self.session,
                        f64::from(delta.x),
                        f64::from(delta.y),
                    );
                }
                if response.hovered() {
                    let (scroll, shift) =
                        ui.input(|input| (input.raw_scroll_delta.y, input.modifiers.shift));
                    if scroll != 0.0 {
                        dialog::wheel(&mut self.session, scroll > 0.0, shift, &self.fetcher);
                    }
                }
                if response.secondary_clicked() {
                    right_clicked_space = true;
                }
                response.context_menu(|ui| {
                    menu_items(ui, self.dispatcher.menu(), &mut picked);
                });
            });

        if right_clicked_space {
            let space = self.session.dialog.space;
            self.session.on_context_click(space);
        }
        for command in commands {
            transform::apply(
                &mut self.session,
                &command,
                CommandSource::DialogControl,
                &self.fetcher,
            );
        }
        if let Some(menu_item_id) = picked {
            self.dispatch_command(&menu_item_id);
        }
        if !keep_open {
            dialog::close(&mut self.session);
        }
    }
}

impl eframe::App for ImageControlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open images…").clicked() {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                        .pick_files()
                    {
                        for path in paths {
                            self.load_path(&path);
                        }
                    }
                }
                ui.label("Right-click an image for transform commands.");
            });
        });

        self.show_page(ctx);
        self.show_dialog(ctx);
    }
}

fn menu_items(ui: &mut egui::Ui, item: &MenuItem, picked: &mut Option<String>) {
    if item.children.is_empty() {
        if ui.button(&item.title).clicked() {
            *picked = Some(item.id.clone());
            ui.close_menu();
        }
        return;
    }
    ui.menu_button(&item.title, |ui| {
        for child in &item.children {
            menu_items(ui, child, picked);
        }
    });
}

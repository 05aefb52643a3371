//! Draw state and rendering.
//!
//! The core never issues draw calls: [`draw_state`] exposes what should be on
//! screen as read-only references. [`render_frame`] is the raylib consumer
//! used by the binary. Tiles and objects are drawn as coloured rectangles
//! keyed by tile id; the avatar uses its texture when one was loaded.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::geometry::RectExt;
use crate::modal::ModalEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::eventqueue::EventQueue;
use crate::resources::fontstore::FontStore;
use crate::resources::mapstore::MapStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::TileMap;
use crate::resources::tilemap::tile::TileRecord;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

const FONT_SIZE: f32 = 20.0;
const LINE_HEIGHT: i32 = 24;
const PANEL_HEIGHT: i32 = 180;
const PANEL_MARGIN: i32 = 16;

/// Everything visible this frame.
pub struct DrawState<'a> {
    pub map: Option<&'a TileMap>,
    pub avatar: Option<Rectangle>,
    /// Texture key of the avatar sprite, if any.
    pub avatar_texture: Option<&'a str>,
    pub modal: Option<&'a ModalEvent>,
    pub game_time: f32,
}

pub fn draw_state(world: &mut World) -> DrawState<'_> {
    let mut avatars = world
        .query_filtered::<(&MapPosition, &BoxCollider, Option<&Sprite>), With<Avatar>>();
    let world: &World = world;
    let avatar = avatars.iter(world).next();

    DrawState {
        map: world
            .get_resource::<MapStore>()
            .and_then(|maps| maps.current().ok()),
        avatar: avatar.map(|(position, collider, _)| collider.bounds(position.pos)),
        avatar_texture: avatar
            .and_then(|(_, _, sprite)| sprite)
            .map(|sprite| sprite.tex_key.as_str()),
        modal: world.get_resource::<EventQueue>().and_then(|q| q.head()),
        game_time: world
            .get_resource::<WorldTime>()
            .map_or(0.0, |time| time.elapsed),
    }
}

/// Keep the avatar centred on screen.
pub fn camera_follow_avatar(
    avatars: Query<(&MapPosition, &BoxCollider), With<Avatar>>,
    mut camera: ResMut<Camera2DRes>,
    screen: Res<ScreenSize>,
) {
    if let Some((position, collider)) = avatars.iter().next() {
        camera.0.target = collider.bounds(position.pos).center_point();
        camera.0.offset = Vector2::new(screen.w as f32 / 2.0, screen.h as f32 / 2.0);
    }
}

fn tile_color(tile: &TileRecord) -> Color {
    if !tile.properties.passable {
        return Color::new(90, 70, 60, 255);
    }
    if tile.properties.trigger.is_some() {
        return Color::new(70, 110, 60, 255);
    }
    // Vary shade by id so different tile kinds are distinguishable.
    let shade = 90 + (tile.tile_id.wrapping_mul(37) % 60) as u8;
    Color::new(shade / 2, shade, shade / 2, 255)
}

fn object_color(tile_id: u32, alpha: u8) -> Color {
    let hue = tile_id.wrapping_mul(67);
    Color::new(
        120 + (hue % 120) as u8,
        80 + ((hue / 7) % 120) as u8,
        60 + ((hue / 13) % 140) as u8,
        alpha,
    )
}

fn draw_text_line(d: &mut RaylibDrawHandle, font: Option<&Font>, text: &str, x: i32, y: i32, color: Color) {
    match font {
        Some(font) => d.draw_text_ex(
            font,
            text,
            Vector2::new(x as f32, y as f32),
            FONT_SIZE,
            1.0,
            color,
        ),
        None => d.draw_text(text, x, y, FONT_SIZE as i32, color),
    }
}

fn draw_modal(
    d: &mut RaylibDrawHandle,
    font: Option<&Font>,
    modal: &ModalEvent,
    screen: ScreenSize,
    game_time: f32,
) {
    let panel = Rectangle::new(
        PANEL_MARGIN as f32,
        (screen.h - PANEL_HEIGHT - PANEL_MARGIN) as f32,
        (screen.w - 2 * PANEL_MARGIN) as f32,
        PANEL_HEIGHT as f32,
    );
    let text_x = panel.x as i32 + PANEL_MARGIN;
    let text_y = panel.y as i32 + PANEL_MARGIN;

    match modal {
        ModalEvent::QueuedAction(_) => return,
        ModalEvent::MessageBox(message) => {
            d.draw_rectangle_rec(panel, Color::new(0, 0, 0, 220));
            d.draw_rectangle_lines_ex(panel, 2.0, Color::WHITE);
            let mut y = text_y;
            for line in message.text.lines() {
                draw_text_line(d, font, line, text_x, y, Color::WHITE);
                y += LINE_HEIGHT;
            }
            if message.continue_marker_visible(game_time) {
                draw_text_line(
                    d,
                    font,
                    "v",
                    panel.right() as i32 - 2 * PANEL_MARGIN,
                    panel.bottom() as i32 - LINE_HEIGHT - PANEL_MARGIN / 2,
                    Color::WHITE,
                );
            }
        }
        ModalEvent::SelectionMenu(menu) => {
            d.draw_rectangle_rec(panel, Color::new(0, 0, 0, 220));
            d.draw_rectangle_lines_ex(panel, 2.0, Color::WHITE);
            let mut y = text_y;
            if let Some(title) = &menu.title {
                draw_text_line(d, font, title, text_x, y, Color::LIGHTGRAY);
                y += LINE_HEIGHT + LINE_HEIGHT / 2;
            }
            let highlight = menu.highlight_visible(game_time);
            for (index, entry) in menu.entries.iter().enumerate() {
                let selected = index == menu.selected();
                let color = if selected && highlight {
                    Color::YELLOW
                } else {
                    Color::WHITE
                };
                let label = if selected {
                    format!("> {}", entry.label)
                } else {
                    format!("  {}", entry.label)
                };
                draw_text_line(d, font, &label, text_x, y, color);
                y += LINE_HEIGHT;
            }
        }
    }
}

/// Draw one frame of `world`.
pub fn render_frame(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    textures: &TextureStore,
    fonts: &FontStore,
    font_path: Option<&str>,
) {
    let camera = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();
    let debug = world.contains_resource::<DebugMode>();
    let debug_lines = if debug { debug_text(world) } else { Vec::new() };

    let state = draw_state(world);
    let font = font_path.and_then(|path| fonts.get(path));

    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);

    {
        let mut d2 = d.begin_mode2D(camera);
        if let Some(map) = state.map {
            for tile in map.tiles.iter().filter(|t| t.visible) {
                d2.draw_rectangle_rec(tile.bounds, tile_color(tile));
            }
            for object in map.objects.iter().filter(|o| o.alpha > 0) {
                d2.draw_rectangle_rec(object.bounds, object_color(object.frame_tile_id, object.alpha));
            }
            if debug {
                for tile in &map.tiles {
                    if !tile.properties.passable {
                        d2.draw_rectangle_lines_ex(tile.bounds, 1.0, Color::RED);
                    } else if tile.properties.trigger.is_some() {
                        d2.draw_rectangle_lines_ex(tile.bounds, 1.0, Color::SKYBLUE);
                    }
                }
                for object in &map.objects {
                    d2.draw_rectangle_lines_ex(object.bounds, 1.0, Color::ORANGE);
                }
            }
        }

        if let Some(bounds) = state.avatar {
            match state.avatar_texture.and_then(|key| textures.get(key)) {
                Some(texture) => {
                    let src = Rectangle::new(0.0, 0.0, texture.width as f32, texture.height as f32);
                    d2.draw_texture_pro(texture, src, bounds, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
                }
                None => d2.draw_rectangle_rec(bounds, Color::GOLD),
            }
            if debug {
                d2.draw_rectangle_lines_ex(bounds, 1.0, Color::GREEN);
                let c = bounds.center_point();
                d2.draw_line(c.x as i32 - 5, c.y as i32, c.x as i32 + 5, c.y as i32, Color::GREEN);
                d2.draw_line(c.x as i32, c.y as i32 - 5, c.x as i32, c.y as i32 + 5, Color::GREEN);
            }
        }
    }

    if let Some(modal) = state.modal {
        draw_modal(&mut d, font, modal, screen, state.game_time);
    }

    if debug {
        let fps = d.get_fps();
        d.draw_text(&format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps), 10, 10, 10, Color::WHITE);
        for (row, line) in debug_lines.iter().enumerate() {
            d.draw_text(line, 10, 30 + row as i32 * 14, 10, Color::WHITE);
        }
    }
}

fn debug_text(world: &World) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(time) = world.get_resource::<WorldTime>() {
        lines.push(format!(
            "Game time: {:.2}s  sim delta: {:.4}{}",
            time.elapsed,
            time.sim_delta,
            if time.is_frozen() { " (frozen)" } else { "" }
        ));
    }
    if let Some(maps) = world.get_resource::<MapStore>() {
        lines.push(format!("Map: {}", maps.current_name().unwrap_or("<none>")));
    }
    if let Some(queue) = world.get_resource::<EventQueue>() {
        lines.push(format!("Modal events: {} ({:?})", queue.len(), queue.state()));
        for (index, event) in queue.iter().enumerate() {
            lines.push(format!(
                "  {}. {}{}",
                index + 1,
                event.kind(),
                if event.is_done() { " (done)" } else { "" }
            ));
        }
    }
    if let Some(signals) = world.get_resource::<WorldSignals>() {
        lines.push(format!(
            "Signals: {} flags, {} integers, {} scalars",
            signals.flags.len(),
            signals.integers.len(),
            signals.scalars.len()
        ));
    }
    lines
}

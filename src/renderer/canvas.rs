//! Canvas 2D renderer

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::*;
use crate::error::{GameError, GameResult};
use crate::platform::{Hud, Renderer};
use crate::sim::{Character, SpriteId};

const HEALTH_BAR_OFFSET: f64 = 10.0;
const HEALTH_BAR_HEIGHT: f64 = 5.0;
const CORPSE_HEIGHT: f64 = 10.0;
const HUD_FONT: &str = "10px \"Press Start 2P\"";
const BUTTON_ALPHA: f64 = 0.5;

/// Loaded image handles
pub struct SpriteSheets {
    sprites: HashMap<SpriteId, HtmlImageElement>,
    left_button: HtmlImageElement,
    right_button: HtmlImageElement,
    attack_button: HtmlImageElement,
}

fn load_image(src: &str) -> GameResult<HtmlImageElement> {
    let img = HtmlImageElement::new().map_err(|e| GameError::Dom(format!("{:?}", e)))?;
    img.set_src(src);
    Ok(img)
}

impl SpriteSheets {
    /// Start loading every image; they draw once the browser has decoded them
    pub fn load() -> GameResult<Self> {
        let mut sprites = HashMap::new();
        sprites.insert(SpriteId::Ninja, load_image("assets/sprite-ninja.png")?);
        sprites.insert(SpriteId::Boss, load_image("assets/sprite-boss.png")?);
        Ok(Self {
            sprites,
            left_button: load_image("assets/button-left.png")?,
            right_button: load_image("assets/button-right.png")?,
            attack_button: load_image("assets/button-attack.png")?,
        })
    }
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sheets: SpriteSheets,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, sheets: SpriteSheets) -> GameResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::Dom(format!("{:?}", e)))?
            .ok_or_else(|| GameError::Dom("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Dom("2d context has the wrong type".into()))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            sheets,
        })
    }

    fn fill_rect(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn draw_button(&self, img: &HtmlImageElement, (x, y): (f64, f64)) {
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, BUTTON_SIZE, BUTTON_SIZE);
    }
}

impl Renderer for CanvasRenderer {
    fn clear_frame(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_character(&mut self, character: &Character) {
        let x = character.pos.x as f64;
        let y = character.pos.y as f64;
        let w = CHARACTER_WIDTH as f64;
        let h = CHARACTER_HEIGHT as f64;

        if !character.alive() {
            self.fill_rect("gray", x, y + h - CORPSE_HEIGHT, w, CORPSE_HEIGHT);
            return;
        }

        let Some(img) = self.sheets.sprites.get(&character.sprite) else {
            log::warn!("No sprite for {:?}", character.sprite);
            return;
        };
        let sx = character.frame() as f64 * w;
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                img, sx, 0.0, w, h, x, y, w, h,
            );
    }

    fn draw_health_bar(&mut self, character: &Character) {
        let x = character.pos.x as f64;
        let y = character.pos.y as f64 - HEALTH_BAR_OFFSET;
        let w = CHARACTER_WIDTH as f64;
        self.fill_rect("red", x, y, w, HEALTH_BAR_HEIGHT);
        let fill = w * character.health_fraction() as f64;
        self.fill_rect("lime", x, y, fill, HEALTH_BAR_HEIGHT);
    }

    fn draw_ui(&mut self, hud: &Hud) {
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(HUD_FONT);
        for (i, line) in hud.lines().iter().enumerate() {
            let _ = self.ctx.fill_text(line, 10.0, 20.0 + i as f64 * 20.0);
        }
    }

    fn draw_touch_buttons(&mut self) {
        self.ctx.set_global_alpha(BUTTON_ALPHA);
        self.draw_button(&self.sheets.left_button, BUTTON_LEFT_POS);
        self.draw_button(&self.sheets.right_button, BUTTON_RIGHT_POS);
        self.draw_button(&self.sheets.attack_button, BUTTON_ATTACK_POS);
        self.ctx.set_global_alpha(1.0);
    }
}

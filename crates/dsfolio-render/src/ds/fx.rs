//! Time-driven effects. Each one is a pure function of the frame timestamp.

use core::f32::consts::TAU;

use micromath::F32Ext;

const PROMPT_BLINK_MS: u64 = 500;
const AVATAR_BLINK_CYCLE_MS: u64 = 4_000;
const AVATAR_BLINK_MS: u64 = 120;
const AVATAR_BOB_PERIOD_MS: u64 = 2_094;
const AVATAR_BOB_AMPLITUDE: f32 = 2.0;

pub(super) fn intro_prompt_visible(now_ms: u64) -> bool {
    (now_ms / PROMPT_BLINK_MS) % 2 == 0
}

pub(super) fn avatar_blinking(now_ms: u64) -> bool {
    now_ms % AVATAR_BLINK_CYCLE_MS < AVATAR_BLINK_MS
}

/// Vertical avatar offset in pixels, in `-2..=2`.
pub(super) fn avatar_bob(now_ms: u64) -> i32 {
    let phase = (now_ms % AVATAR_BOB_PERIOD_MS) as f32 / AVATAR_BOB_PERIOD_MS as f32;
    let offset = F32Ext::round(F32Ext::sin(phase * TAU) * AVATAR_BOB_AMPLITUDE) as i32;
    offset.clamp(-2, 2)
}

//! The two embedded GLSL ES 3.00 programs and their uniform ABI.
//!
//! The escape threshold, iteration cap and colour coefficients are part of the
//! visible output. `julia_iterations` and `fragment_color` mirror the fragment
//! program on the CPU so those constants are pinned by tests.

use glam::{Vec2, Vec4};

pub const A_VERTEX_POSITION: &str = "aVertexPosition";
pub const U_P_MATRIX: &str = "uPMatrix";
pub const U_MV_MATRIX: &str = "uMVMatrix";
pub const U_SPEED: &str = "uSpeed";
pub const U_SIZE: &str = "uSize";
pub const U_TIME: &str = "uTime";

pub const MAX_ITERATIONS: u32 = 255;
pub const ESCAPE_RADIUS_SQ: f32 = 16.0;
/// Fragment coordinates are divided by this before the -2 offset.
pub const PIXEL_SCALE: f32 = 120.0;

pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 aVertexPosition;
uniform mat4 uMVMatrix;
uniform mat4 uPMatrix;
void main(void)
{
    gl_Position = uPMatrix * uMVMatrix * vec4(aVertexPosition, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;
uniform float uSpeed;
uniform float uSize;
uniform float uTime;
out vec4 oColor;
float Julia(vec2 C, vec2 Z)
{
    vec2 C0 = C;
    float n = 0.0;
    float C1 = 0.0;
    for (float j = 0.0; j < 255.0; j++)
    {
        C0 = vec2(C0.x * C0.x - C0.y * C0.y, C0.y * C0.x + C0.x * C0.y) + Z;
        C1 = C0.x * C0.x + C0.y * C0.y;
        if (C1 >= 16.0)
        {
            n = j;
            break;
        }
    }
    return n;
}
void main(void)
{
    vec2 A;
    vec2 B;
    A.x = 0.5 + 0.5 * sin(uSpeed * uTime / 8.0);
    A.y = 1.0 + uSize * sin(uSpeed * uTime / 8.0);
    B.x = gl_FragCoord.x / 120.0 - 2.0;
    B.y = gl_FragCoord.y / 120.0 - 2.0;
    float c = Julia(B, A);
    oColor = vec4(c * 30.0 / 255.0, c * 0.01 / 153.0, c * 20.0 / 152.0, 1.0);
}
"#;

/// Iteration index at which `c <- c^2 + z` first reaches `|c|^2 >= 16`.
/// Points that stay bounded for all 255 steps report 0, like the shader.
pub fn julia_iterations(c: Vec2, z: Vec2) -> u32 {
    let mut c0 = c;
    for j in 0..MAX_ITERATIONS {
        c0 = Vec2::new(c0.x * c0.x - c0.y * c0.y, c0.y * c0.x + c0.x * c0.y) + z;
        if c0.length_squared() >= ESCAPE_RADIUS_SQ {
            return j;
        }
    }
    0
}

/// The Julia constant the fragment program derives from its uniforms.
pub fn julia_seed(speed: f32, size: f32, time: f32) -> Vec2 {
    let phase = (speed * time / 8.0).sin();
    Vec2::new(0.5 + 0.5 * phase, 1.0 + size * phase)
}

/// CPU evaluation of the fragment program for one pixel centre.
pub fn fragment_color(frag_coord: Vec2, speed: f32, size: f32, time: f32) -> Vec4 {
    let b = frag_coord / PIXEL_SCALE - Vec2::splat(2.0);
    let n = julia_iterations(b, julia_seed(speed, size, time)) as f32;
    Vec4::new(
        n * 30.0 / 255.0,
        n * 0.01 / 153.0,
        n * 20.0 / 152.0,
        1.0,
    )
}

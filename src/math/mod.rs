//! 数学类型模块
//!
//! 基于 `nalgebra` 的类型别名，以及网格构建用到的少量标量工具。

pub use nalgebra::{
    Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3, Vector4 as Vec4,
};

// 类型别名，使用更简洁的名称
pub type Vector2 = Vec2<f32>;
pub type Vector3 = Vec3<f32>;
pub type Vector4 = Vec4<f32>;
pub type Matrix4 = Mat4<f32>;

/// 数学工具函数
pub mod utils {
    /// 线性插值
    #[inline]
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// 把矩阵按行主序展开成 16 个浮点数
///
/// nalgebra 内部按列存储，这里显式转置后再展开。
pub fn to_row_major(m: &Matrix4) -> [f32; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(m.transpose().as_slice());
    out
}

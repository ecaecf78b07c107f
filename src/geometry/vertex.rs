//! 几何体顶点定义模块
//!
//! 定义方块面网格使用的顶点结构，包含位置、法线、切线、UV坐标和顶点颜色。

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::math::{Vector2, Vector3, Vector4};

/// 完整的3D顶点结构
///
/// 内存布局与GPU兼容，使用 `#[repr(C)]` 保证顺序和对齐。
///
/// # 内存布局
///
/// - position: 12 bytes (3 * f32)
/// - normal: 12 bytes (3 * f32)
/// - tangent: 12 bytes (3 * f32)
/// - texcoord: 8 bytes (2 * f32)
/// - color: 16 bytes (4 * f32)
/// - **总计**: 60 bytes
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    pub position: [f32; 3],

    /// 法线向量 (nx, ny, nz)
    pub normal: [f32; 3],

    /// 切线向量 (tx, ty, tz)
    ///
    /// 方块面的切线按轴固定取值，不从边向量推导。
    pub tangent: [f32; 3],

    /// 纹理坐标 (u, v)
    pub texcoord: [f32; 2],

    /// 顶点颜色 (r, g, b, a)
    pub color: [f32; 4],
}

/// 顶点属性描述，供外部上传代码绑定 `glVertexAttribPointer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// 着色器中的 `layout(location = N)`
    pub location: u32,
    /// 分量数（均为 f32）
    pub components: i32,
    /// 在顶点结构中的字节偏移
    pub offset: usize,
}

impl Vertex {
    /// 顶点步长（字节）
    pub const STRIDE: usize = size_of::<Vertex>();

    /// 与 `shaders/block.vert` 的输入布局一致
    pub const ATTRIBUTES: [VertexAttribute; 5] = [
        VertexAttribute { location: 0, components: 3, offset: offset_of!(Vertex, position) },
        VertexAttribute { location: 1, components: 3, offset: offset_of!(Vertex, normal) },
        VertexAttribute { location: 2, components: 3, offset: offset_of!(Vertex, tangent) },
        VertexAttribute { location: 3, components: 2, offset: offset_of!(Vertex, texcoord) },
        VertexAttribute { location: 4, components: 4, offset: offset_of!(Vertex, color) },
    ];

    /// 创建一个新的顶点
    #[inline]
    pub fn new(
        position: Vector3,
        normal: Vector3,
        tangent: Vector3,
        texcoord: Vector2,
        color: Vector4,
    ) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            tangent: tangent.into(),
            texcoord: texcoord.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        // 3*4 + 3*4 + 3*4 + 2*4 + 4*4 = 60 bytes
        assert_eq!(size_of::<Vertex>(), 60);
        assert_eq!(Vertex::STRIDE, 60);
    }

    #[test]
    fn test_vertex_alignment() {
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn test_attribute_offsets() {
        let offsets: Vec<usize> = Vertex::ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24, 36, 44]);

        let floats: i32 = Vertex::ATTRIBUTES.iter().map(|a| a.components).sum();
        assert_eq!(floats as usize * 4, Vertex::STRIDE);
    }

    #[test]
    fn test_vertex_creation() {
        let vertex = Vertex::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector2::new(0.5, 0.25),
            Vector4::new(1.0, 0.0, 0.0, 1.0),
        );

        assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertex.tangent, [1.0, 0.0, 0.0]);
        assert_eq!(vertex.texcoord, [0.5, 0.25]);
        assert_eq!(vertex.color, [1.0, 0.0, 0.0, 1.0]);
    }
}

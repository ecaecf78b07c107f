//! 几何体构建模块
//!
//! 在 CPU 侧组装方块面网格，输出可直接上传的顶点/索引数组。
//!
//! # 模块结构
//!
//! - `vertex`: 顶点数据结构定义与属性布局
//! - `builder`: 网格构建器（顶点追加、轴对齐平面）
//! - `mesh`: 构建结果 `MeshData`
//!
//! # 数据流
//!
//! ```text
//! MeshBuilder::add_plane / add_vertex
//!     ↓
//! MeshData (CPU侧数据)
//!     ↓
//! 外部上传代码 (glBufferData)
//! ```
//!
//! # 使用示例
//!
//! ```rust
//! use voksel::geometry::{Axis, MeshBuilder};
//! use voksel::math::Vector4;
//!
//! let mut builder = MeshBuilder::new();
//! let white = Vector4::new(1.0, 1.0, 1.0, 1.0);
//! let uv = Vector4::new(0.0, 0.0, 1.0, 1.0);
//! builder.add_plane(1.0, Axis::Y, white, uv, false);
//! builder.add_plane(0.0, Axis::Y, white, uv, true);
//!
//! let mesh = builder.build();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

pub mod vertex;
pub mod mesh;
pub mod builder;

// 重新导出常用类型
pub use vertex::{Vertex, VertexAttribute};
pub use mesh::MeshData;
pub use builder::{Axis, MeshBuilder};

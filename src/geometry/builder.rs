//! 网格构建器
//!
//! 逐个追加顶点和轴对齐的单位平面（方块的一个面），得到可直接上传的顶点/索引数组。
//! 构建器只做追加，不支持删除或修改已有数据。
//!
//! # 平面约定
//!
//! | 轴 | 法线      | 切线 (u 方向) | v 方向 |
//! |----|-----------|---------------|--------|
//! | X  | (±1,0,0)  | (0,0,1)       | +Y     |
//! | Y  | (0,±1,0)  | (1,0,0)       | +Z     |
//! | Z  | (0,0,±1)  | (0,1,0)       | +X     |
//!
//! 四个角按同一方向环绕；`flip` 时法线取反，索引改为 `{0,3,2, 2,1,0}` 以反转三角形环绕，
//! 顶点本身不重新生成。
//!
//! 注意：未翻转时 Z 平面从法线一侧看是逆时针，X/Y 平面是顺时针。
//! 角点顺序是既定的网格格式，外部开启面剔除时需要按轴处理。

use tracing::debug;

use super::mesh::MeshData;
use super::vertex::Vertex;
use crate::core::config::{MeshConfig, TexCoordMode};
use crate::math::{utils::lerp, Vector2, Vector3, Vector4};

/// 平面垂直的坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// 一个平面追加的顶点数
pub const PLANE_VERTICES: usize = 4;

/// 一个平面追加的索引数
pub const PLANE_INDICES: usize = 6;

const FRONT_INDICES: [u32; PLANE_INDICES] = [0, 1, 2, 2, 3, 0];
const BACK_INDICES: [u32; PLANE_INDICES] = [0, 3, 2, 2, 1, 0];

impl Axis {
    /// 分量下标
    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// 正方向单位向量
    pub fn unit(self) -> Vector3 {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.0;
        v
    }

    /// 平面的固定切线轴（纹理 u 方向）
    pub fn tangent_axis(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Y => Axis::X,
            Axis::Z => Axis::Y,
        }
    }

    /// 纹理 v 方向所在的轴
    pub fn bitangent_axis(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// 平面四个角，按环绕顺序排列
    fn corners(self, offset: f32) -> [Vector3; PLANE_VERTICES] {
        match self {
            Axis::X => [
                Vector3::new(offset, 0.0, 0.0),
                Vector3::new(offset, 0.0, 1.0),
                Vector3::new(offset, 1.0, 1.0),
                Vector3::new(offset, 1.0, 0.0),
            ],
            Axis::Y => [
                Vector3::new(0.0, offset, 0.0),
                Vector3::new(1.0, offset, 0.0),
                Vector3::new(1.0, offset, 1.0),
                Vector3::new(0.0, offset, 1.0),
            ],
            Axis::Z => [
                Vector3::new(0.0, 0.0, offset),
                Vector3::new(1.0, 0.0, offset),
                Vector3::new(1.0, 1.0, offset),
                Vector3::new(0.0, 1.0, offset),
            ],
        }
    }
}

/// 网格构建器
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    texcoord_mode: TexCoordMode,
}

impl MeshBuilder {
    /// 创建空的构建器（纹理坐标按 uv 边界生成）
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置创建
    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new().with_texcoord_mode(config.texcoord_mode)
    }

    /// 预分配 `planes` 个平面的空间
    pub fn with_capacity(planes: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(planes * PLANE_VERTICES),
            indices: Vec::with_capacity(planes * PLANE_INDICES),
            texcoord_mode: TexCoordMode::default(),
        }
    }

    /// 设置平面纹理坐标的生成方式
    pub fn with_texcoord_mode(mut self, mode: TexCoordMode) -> Self {
        self.texcoord_mode = mode;
        self
    }

    pub fn texcoord_mode(&self) -> TexCoordMode {
        self.texcoord_mode
    }

    /// 原样追加一个顶点，不做任何校验
    pub fn add_vertex(
        &mut self,
        position: Vector3,
        normal: Vector3,
        tangent: Vector3,
        texcoord: Vector2,
        color: Vector4,
    ) {
        self.vertices
            .push(Vertex::new(position, normal, tangent, texcoord, color));
    }

    /// 追加一个轴对齐的单位平面
    ///
    /// 平面垂直于 `axis`，位于该轴坐标 `offset` 处，另外两个坐标覆盖 [0,1]×[0,1]。
    /// 固定追加 4 个顶点和 6 个索引，索引以追加前的顶点数为基准。
    ///
    /// # 参数
    ///
    /// - `uv`: 纹理区域 `(u0, v0, u1, v1)`，`TexCoordMode::Zero` 时忽略
    /// - `flip`: 翻转法线并反转三角形环绕
    pub fn add_plane(&mut self, offset: f32, axis: Axis, color: Vector4, uv: Vector4, flip: bool) {
        let base = self.vertices.len() as u32;
        let sign = if flip { -1.0 } else { 1.0 };
        let normal = axis.unit() * sign;
        let tangent_axis = axis.tangent_axis();
        let tangent = tangent_axis.unit();
        let (u, v) = (tangent_axis.index(), axis.bitangent_axis().index());

        for corner in axis.corners(offset) {
            let texcoord = match self.texcoord_mode {
                TexCoordMode::Zero => Vector2::zeros(),
                TexCoordMode::Bounds => {
                    Vector2::new(lerp(uv.x, uv.z, corner[u]), lerp(uv.y, uv.w, corner[v]))
                }
            };
            self.add_vertex(corner, normal, tangent, texcoord, color);
        }

        let local = if flip { &BACK_INDICES } else { &FRONT_INDICES };
        self.indices.extend(local.iter().map(|i| base + i));
    }

    /// 已追加的顶点
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 已追加的索引
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 消耗构建器，得到网格数据
    pub fn build(self) -> MeshData {
        debug!(
            vertices = self.vertices.len(),
            indices = self.indices.len(),
            "Mesh built"
        );
        MeshData {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

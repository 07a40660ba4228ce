//! Геометрия арены: границы, радиусы коллизий

use bevy::prelude::*;

/// Границы арены: квадрат [-half_extent, half_extent] по X/Z
///
/// Снаряд за границей = попадание в стену. Танки не выезжают за границу.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ArenaBounds {
    pub half_extent: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl ArenaBounds {
    pub fn new(half_extent: f32) -> Self {
        Self {
            half_extent: half_extent.abs(),
        }
    }

    pub fn contains(&self, position: Vec3) -> bool {
        position.x.abs() <= self.half_extent && position.z.abs() <= self.half_extent
    }

    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(-self.half_extent, self.half_extent),
            position.y,
            position.z.clamp(-self.half_extent, self.half_extent),
        )
    }
}

/// Радиус корпуса танка для overlap-проверки снарядов
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CollisionRadius(pub f32);

impl Default for CollisionRadius {
    fn default() -> Self {
        Self(1.5)
    }
}

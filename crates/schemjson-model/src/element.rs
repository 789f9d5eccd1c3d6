use schemjson_blocks::TextureTable;
use schemjson_geom::{Aabb, Vec3};
use serde::Serialize;
use serde::ser::{Serializer, SerializeMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Face {
    pub texture: String,
    pub uv: [f32; 4],
}

impl Face {
    /// Face referencing palette `key`, with every UV component set to `r`.
    pub fn new(key: &str, r: f32) -> Self {
        Self {
            texture: format!("#{}", key),
            uv: [r; 4],
        }
    }
}

/// One face per [`Direction`], indexed in `Direction::ALL` order.
#[derive(Clone, Debug, PartialEq)]
pub struct Faces([Face; 6]);

impl Faces {
    pub fn uniform(face: Face) -> Self {
        Faces(std::array::from_fn(|_| face.clone()))
    }

    pub fn get(&self, dir: Direction) -> &Face {
        &self.0[dir as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Face)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }
}

impl Serialize for Faces {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        for (dir, face) in self.iter() {
            map.serialize_entry(dir.name(), face)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cuboid {
    pub from: Vec3,
    pub to: Vec3,
    pub faces: Faces,
}

impl Cuboid {
    pub fn new(bounds: Aabb, faces: Faces) -> Self {
        Self {
            from: bounds.min,
            to: bounds.max,
            faces,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.from, self.to)
    }

    #[inline]
    pub fn set_bounds(&mut self, b: Aabb) {
        self.from = b.min;
        self.to = b.max;
    }
}

/// Block-model document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Model {
    #[serde(rename = "__comment")]
    pub comment: String,
    pub textures: TextureTable,
    pub elements: Vec<Cuboid>,
}

// Pattern: Composite
// Leaves and groups share one trait, so a tree of graphics is moved and
// drawn exactly like a single graphic.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::io::Write;

pub trait Graphic {
    fn move_by(&mut self, dx: i32, dy: i32);
    fn draw(&self) -> Vec<String>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
}

impl Dot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graphic for Dot {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    fn draw(&self) -> Vec<String> {
        vec![format!("Drew Dot object. X={}, Y={}", self.x, self.y)]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Circle {
    center: Dot,
    pub radius: u32,
}

impl Circle {
    pub fn new(radius: u32) -> Self {
        Self {
            center: Dot::new(),
            radius,
        }
    }
}

impl Graphic for Circle {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.center.move_by(dx, dy);
    }

    fn draw(&self) -> Vec<String> {
        vec![format!(
            "Drew Circle object. X={}, Y={}, Radius={}",
            self.center.x, self.center.y, self.radius
        )]
    }
}

/// Handle returned by [`CompositeGraphic::add`], used to remove the child again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphicId(u64);

#[derive(Default)]
pub struct CompositeGraphic {
    children: Vec<(GraphicId, Box<dyn Graphic>)>,
    next_id: u64,
}

impl CompositeGraphic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, graphic: impl Graphic + 'static) -> GraphicId {
        let id = GraphicId(self.next_id);
        self.next_id += 1;
        self.children.push((id, Box::new(graphic)));
        id
    }

    pub fn remove(&mut self, id: GraphicId) -> Option<Box<dyn Graphic>> {
        let index = self.children.iter().position(|(child, _)| *child == id)?;
        Some(self.children.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Graphic for CompositeGraphic {
    fn move_by(&mut self, dx: i32, dy: i32) {
        for (_, child) in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    fn draw(&self) -> Vec<String> {
        self.children.iter().flat_map(|(_, child)| child.draw()).collect()
    }
}

// Drew Dot object. X=10, Y=-10
// Drew Circle object. X=20, Y=2, Radius=50
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let mut dot = Dot::new();
    dot.move_by(10, -10);

    let mut circle = Circle::new(50);
    circle.move_by(20, 2);

    let mut graphic1 = CompositeGraphic::new();
    let mut graphic2 = CompositeGraphic::new();
    graphic1.add(dot);
    graphic2.add(circle);

    let mut general_graphic = CompositeGraphic::new();
    general_graphic.add(graphic1);
    general_graphic.add(graphic2);

    for line in general_graphic.draw() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

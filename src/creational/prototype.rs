// Pattern: Prototype
// A registry of exemplar objects. Clones are deep copies with optional
// overrides applied through each prototype's own setters.

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::io::Write;
use tracing::debug;

/// Something the registry can copy and then adjust field by field.
///
/// `clone` must duplicate the whole object graph: no `Rc`, `RefCell` or other
/// shared handle may end up reachable from both the exemplar and the copy.
pub trait Prototype: Clone {
    type Override;

    fn apply(&mut self, field: Self::Override) -> Result<()>;
}

// ============================================================================
// Shapes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circle {
    x: i32,
    y: i32,
    color: Option<String>,
    height: u32,
    width: u32,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Circle. X: {}, Y: {}, Height: {}, Width: {}",
            self.x, self.y, self.height, self.width
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rectangle {
    x: i32,
    y: i32,
    color: Option<String>,
    corner_radius: u32,
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
    }

    pub fn corner_radius(&self) -> u32 {
        self.corner_radius
    }

    pub fn set_corner_radius(&mut self, radius: u32) {
        self.corner_radius = radius;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Rectangle. X: {}, Y: {}, Corner radius: {}",
            self.x, self.y, self.corner_radius
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(_) => "Rectangle",
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Circle(circle) => fmt::Display::fmt(circle, f),
            Shape::Rectangle(rectangle) => fmt::Display::fmt(rectangle, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeField {
    X(i32),
    Y(i32),
    Color(String),
    Height(u32),
    Width(u32),
    CornerRadius(u32),
}

impl ShapeField {
    fn name(&self) -> &'static str {
        match self {
            ShapeField::X(_) => "x",
            ShapeField::Y(_) => "y",
            ShapeField::Color(_) => "color",
            ShapeField::Height(_) => "height",
            ShapeField::Width(_) => "width",
            ShapeField::CornerRadius(_) => "corner_radius",
        }
    }
}

impl Prototype for Shape {
    type Override = ShapeField;

    fn apply(&mut self, field: ShapeField) -> Result<()> {
        match (self, field) {
            (Shape::Circle(c), ShapeField::X(x)) => c.set_x(x),
            (Shape::Circle(c), ShapeField::Y(y)) => c.set_y(y),
            (Shape::Circle(c), ShapeField::Color(color)) => c.set_color(color),
            (Shape::Circle(c), ShapeField::Height(h)) => c.set_height(h),
            (Shape::Circle(c), ShapeField::Width(w)) => c.set_width(w),
            (Shape::Rectangle(r), ShapeField::X(x)) => r.set_x(x),
            (Shape::Rectangle(r), ShapeField::Y(y)) => r.set_y(y),
            (Shape::Rectangle(r), ShapeField::Color(color)) => r.set_color(color),
            (Shape::Rectangle(r), ShapeField::CornerRadius(radius)) => r.set_corner_radius(radius),
            (shape, field) => {
                return Err(PatternError::UnknownField {
                    shape: shape.kind(),
                    field: field.name(),
                })
            }
        }
        Ok(())
    }
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug)]
pub struct PrototypeRegistry<K, V> {
    objects: HashMap<K, V>,
}

impl<K, V> Default for PrototypeRegistry<K, V> {
    fn default() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }
}

impl<K, V> PrototypeRegistry<K, V>
where
    K: Eq + Hash + fmt::Display,
    V: Prototype,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the exemplar previously stored under `id`, if any.
    pub fn register(&mut self, id: K, obj: V) -> Option<V> {
        debug!(%id, "registering prototype");
        self.objects.insert(id, obj)
    }

    pub fn unregister(&mut self, id: &K) -> Result<V> {
        self.objects
            .remove(id)
            .ok_or_else(|| PatternError::not_registered(id))
    }

    pub fn clone(&self, id: &K) -> Result<V> {
        let found = self
            .objects
            .get(id)
            .ok_or_else(|| PatternError::invalid_identifier(id))?;
        debug!(%id, "cloning prototype");
        Ok(found.clone())
    }

    /// Deep copy, then apply `overrides` in order. The copy is dropped on
    /// the first override that does not fit.
    pub fn clone_with<I>(&self, id: &K, overrides: I) -> Result<V>
    where
        I: IntoIterator<Item = V::Override>,
    {
        let mut obj = self.clone(id)?;
        for field in overrides {
            obj.apply(field)?;
        }
        Ok(obj)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.objects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.objects.keys()
    }
}

// ============================================================================
// Demo
// ============================================================================

// Circle. X: 10, Y: 10, Height: 50, Width: 300
// Circle. X: 20, Y: 20, Height: 50, Width: 300
// Rectangle. X: 0, Y: 0, Corner radius: 8
// Clone of 2 failed: Incorrect object identifier: 2
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let mut prototype = PrototypeRegistry::new();

    let mut circle1 = Circle::new();
    circle1.set_x(10);
    circle1.set_y(10);
    circle1.set_height(50);
    circle1.set_width(300);

    prototype.register(1, Shape::from(circle1.clone()));
    let circle2 = prototype.clone_with(&1, [ShapeField::X(20), ShapeField::Y(20)])?;
    writeln!(out, "{}\n{}", circle1, circle2)?;

    prototype.register(2, Shape::from(Rectangle::new()));
    let rounded = prototype.clone_with(&2, [ShapeField::CornerRadius(8)])?;
    writeln!(out, "{}", rounded)?;

    prototype.unregister(&2)?;
    if let Err(err) = prototype.clone(&2) {
        writeln!(out, "Clone of 2 failed: {}", err)?;
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn exemplar() -> Circle {
        let mut circle = Circle::new();
        circle.set_x(10);
        circle.set_y(10);
        circle.set_color("red");
        circle.set_height(50);
        circle.set_width(300);
        circle
    }

    fn registry() -> PrototypeRegistry<u32, Shape> {
        let mut registry = PrototypeRegistry::new();
        registry.register(1, Shape::from(exemplar()));
        registry
    }

    #[test]
    fn test_clone_is_independent() {
        let registry = registry();
        let mut first = registry.clone(&1).unwrap();
        first.apply(ShapeField::X(99)).unwrap();
        first.apply(ShapeField::Color("blue".to_string())).unwrap();

        let second = registry.clone(&1).unwrap();
        assert_eq!(second, Shape::from(exemplar()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_clone_with_overrides() {
        let registry = registry();
        let shape = registry
            .clone_with(&1, [ShapeField::X(20), ShapeField::Y(20)])
            .unwrap();
        assert_eq!(shape.to_string(), "Circle. X: 20, Y: 20, Height: 50, Width: 300");
        match shape {
            Shape::Circle(circle) => assert_eq!(circle.color(), Some("red")),
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_clone_missing_id() {
        let registry = registry();
        assert!(matches!(
            registry.clone(&42),
            Err(PatternError::InvalidIdentifier(id)) if id == "42"
        ));
    }

    #[test]
    fn test_override_not_on_shape() {
        let registry = registry();
        let result = registry.clone_with(&1, [ShapeField::CornerRadius(4)]);
        assert!(matches!(
            result,
            Err(PatternError::UnknownField { shape: "Circle", field: "corner_radius" })
        ));
        assert_eq!(registry.clone(&1).unwrap(), Shape::from(exemplar()));
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = registry();
        let previous = registry.register(1, Shape::from(Rectangle::new()));
        assert_eq!(previous, Some(Shape::from(exemplar())));
        assert_eq!(registry.clone(&1).unwrap().kind(), "Rectangle");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let mut registry = registry();
        registry.unregister(&1).unwrap();
        assert!(!registry.contains(&1));
        assert!(registry.is_empty());
        assert!(matches!(registry.clone(&1), Err(PatternError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_unregister_missing_is_checked() {
        let mut registry: PrototypeRegistry<&str, Shape> = PrototypeRegistry::new();
        assert!(matches!(
            registry.unregister(&"ghost"),
            Err(PatternError::NotRegistered(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_string_keys() {
        let mut registry = PrototypeRegistry::new();
        registry.register("badge".to_string(), Shape::from(Rectangle::new()));
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, ["badge"]);
    }

    proptest! {
        #[test]
        fn test_mutating_clones_never_leaks(x in any::<i32>(), y in any::<i32>(), color in "[a-z]{1,10}") {
            let registry = registry();
            let mut copy = registry.clone(&1).unwrap();
            copy.apply(ShapeField::X(x)).unwrap();
            copy.apply(ShapeField::Y(y)).unwrap();
            copy.apply(ShapeField::Color(color)).unwrap();

            prop_assert_eq!(registry.clone(&1).unwrap(), Shape::from(exemplar()));
        }
    }
}

//! Declarative building blocks for a screen.
//!
//! Widgets are plain values rebuilt from current state on every frame; the
//! PascalCase constructors mirror their Jetpack Compose counterparts.

use std::fmt;
use std::rc::Rc;

use cadence_animation::ContentFrame;
use cadence_ui_graphics::{Color, Dp, EdgeInsets, RoundedCornerShape, Sp, TextStyle};

use crate::arrangement::{HorizontalAlignment, LinearArrangement};

/// Material 3 baseline primary color, the default button container.
pub const PRIMARY: Color = Color::from_argb(0xFF6650A4);

pub enum Node {
    Text(TextNode),
    Button(ButtonNode),
    Lane(LaneNode),
    Spacer(Dp),
    /// Takes a share of the column's leftover height.
    Weighted(f32),
    Column(ColumnNode),
    Content(ContentNode),
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(node) => f.debug_tuple("Text").field(&node.text).finish(),
            Node::Button(node) => f.debug_tuple("Button").field(&node.label).finish(),
            Node::Lane(node) => f
                .debug_tuple("Lane")
                .field(&node.label)
                .field(&node.offset)
                .finish(),
            Node::Spacer(height) => f.debug_tuple("Spacer").field(height).finish(),
            Node::Weighted(weight) => f.debug_tuple("Weighted").field(weight).finish(),
            Node::Column(node) => f.debug_list().entries(&node.children).finish(),
            Node::Content(node) => f.debug_tuple("Content").field(&node.frames).finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextNode {
    pub text: String,
    pub style: TextStyle,
}

pub fn Text(text: impl Into<String>, style: TextStyle) -> TextNode {
    TextNode {
        text: text.into(),
        style,
    }
}

#[derive(Clone)]
pub struct ButtonNode {
    pub label: String,
    pub style: TextStyle,
    pub container_color: Color,
    pub shape: RoundedCornerShape,
    pub min_height: Dp,
    pub content_padding: EdgeInsets,
    pub fill_max_width: bool,
    pub on_click: Rc<dyn Fn()>,
}

impl ButtonNode {
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_width = true;
        self
    }

    pub fn height(mut self, height: Dp) -> Self {
        self.min_height = height;
        self
    }

    pub fn shape(mut self, shape: RoundedCornerShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn font_size(mut self, font_size: Sp) -> Self {
        self.style.font_size = font_size;
        self
    }
}

pub fn Button(label: impl Into<String>, on_click: impl Fn() + 'static) -> ButtonNode {
    ButtonNode {
        label: label.into(),
        style: TextStyle::label_large().with_color(Color::WHITE),
        container_color: PRIMARY,
        shape: RoundedCornerShape::circle(),
        min_height: Dp(40.0),
        content_padding: EdgeInsets::symmetric(24.0, 8.0),
        fill_max_width: false,
        on_click: Rc::new(on_click),
    }
}

/// Labelled track with a circular token offset along it.
#[derive(Clone, Debug)]
pub struct LaneNode {
    pub label: String,
    pub label_style: TextStyle,
    pub offset: Dp,
    pub color: Color,
    pub track_color: Color,
    pub track_height: Dp,
    pub track_padding: Dp,
    pub track_shape: RoundedCornerShape,
    pub token_size: Dp,
}

pub fn AnimatedLane(label: impl Into<String>, offset: Dp, color: Color) -> LaneNode {
    LaneNode {
        label: label.into(),
        label_style: TextStyle::label_medium().with_color(Color::GRAY),
        offset,
        color,
        track_color: Color::WHITE,
        track_height: Dp(50.0),
        track_padding: Dp(4.0),
        track_shape: RoundedCornerShape::uniform(25.0),
        token_size: Dp(42.0),
    }
}

pub fn Spacer(height: Dp) -> Node {
    Node::Spacer(height)
}

pub fn WeightedSpacer(weight: f32) -> Node {
    Node::Weighted(weight)
}

/// Vertically stacked children. Spacing and padding are in dp.
pub struct ColumnNode {
    pub children: Vec<Node>,
    pub padding: EdgeInsets,
    pub arrangement: LinearArrangement,
    pub alignment: HorizontalAlignment,
}

impl ColumnNode {
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

pub fn Column(children: Vec<Node>) -> ColumnNode {
    ColumnNode {
        children,
        padding: EdgeInsets::default(),
        arrangement: LinearArrangement::Start,
        alignment: HorizontalAlignment::Start,
    }
}

/// Text swapped through an animated content transition. Frame offsets are in dp.
#[derive(Clone, Debug)]
pub struct ContentNode {
    pub frames: Vec<ContentFrame<String>>,
    pub style: TextStyle,
}

pub fn AnimatedContentText(frames: Vec<ContentFrame<String>>, style: TextStyle) -> ContentNode {
    ContentNode { frames, style }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<ButtonNode> for Node {
    fn from(node: ButtonNode) -> Self {
        Node::Button(node)
    }
}

impl From<LaneNode> for Node {
    fn from(node: LaneNode) -> Self {
        Node::Lane(node)
    }
}

impl From<ColumnNode> for Node {
    fn from(node: ColumnNode) -> Self {
        Node::Column(node)
    }
}

impl From<ContentNode> for Node {
    fn from(node: ContentNode) -> Self {
        Node::Content(node)
    }
}

// Layout collaborator: bounding boxes straight from the DOM, never cached
use web_sys::{DomRect, Element};
use yew::NodeRef;

use crate::state::Rect;

impl From<DomRect> for Rect {
    fn from(r: DomRect) -> Self {
        Rect { x: r.left(), y: r.top(), width: r.width(), height: r.height() }
    }
}

pub fn measure(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>().map(|el| Rect::from(el.get_bounding_client_rect()))
}

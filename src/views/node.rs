// ============================================================================
// VIEW NODE - Descripción de salida producida por las vistas
// ============================================================================
// Las vistas son puras: convierten datos de jugadores en un árbol ViewNode.
// Solo dom::surface toca el documento real.
// ============================================================================

use crate::models::PlayerId;

/// Qué hace un control enlazado al activarse. El id del jugador viaja en el
/// propio binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowDetails(PlayerId),
    Remove(PlayerId),
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub tag: String,
    pub class: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<ViewNode>,
    pub on_click: Option<Action>,
}

impl ViewNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: None,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Texto concatenado del nodo y sus descendientes (en profundidad)
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Todas las acciones enlazadas, en orden del documento
    pub fn actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Some(action) = node.on_click {
                out.push(action);
            }
        });
        out
    }

    /// Primer descendiente (o el propio nodo) con ese tag
    pub fn find_tag(&self, tag: &str) -> Option<&ViewNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_tag(tag))
    }

    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a ViewNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_joins_nested_text() {
        let node = ViewNode::new("div")
            .child(ViewNode::new("h4").text("Name: Rex"))
            .child(ViewNode::new("p").text("Player ID: 7"));
        assert_eq!(node.text_content(), "Name: Rex Player ID: 7");
    }

    #[test]
    fn actions_are_collected_in_document_order() {
        let id = PlayerId(3);
        let node = ViewNode::new("div")
            .child(ViewNode::new("button").on_click(Action::ShowDetails(id)))
            .child(ViewNode::new("div").child(ViewNode::new("button").on_click(Action::Remove(id))));
        assert_eq!(node.actions(), vec![Action::ShowDetails(id), Action::Remove(id)]);
    }

    #[test]
    fn find_tag_and_get_attr() {
        let node = ViewNode::new("div").child(ViewNode::new("img").attr("src", "x.png"));
        assert_eq!(node.find_tag("img").and_then(|img| img.get_attr("src")), Some("x.png"));
        assert!(node.find_tag("video").is_none());
    }
}

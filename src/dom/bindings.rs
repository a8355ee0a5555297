// ============================================================================
// BINDINGS - Numeración de controles enlazados antes de llegar al DOM
// ============================================================================

use crate::utils::constants::BINDING_ATTRIBUTE;
use crate::views::{Action, ViewNode};

/// Contenido listo para aplicar a una región: cada nodo con acción lleva
/// un índice `data-binding` dentro de `table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundContent {
    pub nodes: Vec<ViewNode>,
    pub table: Vec<Action>,
}

/// Numerar las acciones de `nodes` en profundidad, empezando en 0.
/// La tabla describe solo `nodes`; al aplicarla reemplaza la tabla anterior
/// de la región.
pub fn bind_content(nodes: &[ViewNode]) -> BoundContent {
    let mut table = Vec::new();
    let nodes = nodes.iter().map(|node| number_node(node, &mut table)).collect();
    BoundContent { nodes, table }
}

fn number_node(node: &ViewNode, table: &mut Vec<Action>) -> ViewNode {
    let mut numbered = node.clone();
    numbered.attrs.retain(|(name, _)| name != BINDING_ATTRIBUTE);

    if let Some(action) = node.on_click {
        numbered
            .attrs
            .push((BINDING_ATTRIBUTE.to_string(), table.len().to_string()));
        table.push(action);
    }

    numbered.children = node
        .children
        .iter()
        .map(|child| number_node(child, table))
        .collect();
    numbered
}

/// Acción asociada al valor `data-binding` del elemento clicado
pub fn resolve_binding(table: &[Action], value: Option<&str>) -> Option<Action> {
    let index = value?.trim().parse::<usize>().ok()?;
    table.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, PlayerId};
    use crate::views::{render_player_details, render_player_list};

    fn bound_indices(content: &BoundContent) -> Vec<String> {
        let mut out = Vec::new();
        for node in &content.nodes {
            node.walk(&mut |n| {
                if let Some(index) = n.get_attr(BINDING_ATTRIBUTE) {
                    out.push(index.to_string());
                }
            });
        }
        out
    }

    #[test]
    fn list_controls_are_numbered_in_document_order() {
        let players = vec![
            Player::new(3, "Bo", "Pug", "bo.png"),
            Player::new(7, "Rex", "Lab", "x.png"),
        ];
        let content = bind_content(&render_player_list(&players));

        assert_eq!(content.nodes.len(), 2);
        assert_eq!(bound_indices(&content), vec!["0", "1", "2", "3"]);
        assert_eq!(
            content.table,
            vec![
                Action::ShowDetails(PlayerId(3)),
                Action::Remove(PlayerId(3)),
                Action::ShowDetails(PlayerId(7)),
                Action::Remove(PlayerId(7)),
            ]
        );
    }

    #[test]
    fn rebinding_new_content_never_extends_previous_table() {
        let first = bind_content(&render_player_list(&[
            Player::new(1, "Bo", "Pug", "bo.png"),
            Player::new(2, "Rex", "Lab", "x.png"),
            Player::new(3, "Mia", "Corgi", "mia.png"),
        ]));
        let second = bind_content(&render_player_list(&[Player::new(2, "Rex", "Lab", "x.png")]));

        assert_eq!(first.table.len(), 6);
        assert_eq!(second.nodes.len(), 1);
        assert_eq!(second.table, vec![Action::ShowDetails(PlayerId(2)), Action::Remove(PlayerId(2))]);
        assert_eq!(bound_indices(&second), vec!["0", "1"]);
    }

    #[test]
    fn placeholder_has_no_bindings() {
        let content = bind_content(&render_player_list(&[]));
        assert_eq!(content.nodes.len(), 1);
        assert!(content.table.is_empty());
        assert!(bound_indices(&content).is_empty());
    }

    #[test]
    fn binding_same_content_twice_is_stable() {
        let nodes = render_player_list(&[Player::new(7, "Rex", "Lab", "x.png")]);
        let once = bind_content(&nodes);
        assert_eq!(bind_content(&once.nodes), once);
    }

    #[test]
    fn resolve_maps_index_back_to_action() {
        let content = bind_content(&[render_player_details(&Player::new(7, "Rex", "Lab", "x.png"))]);
        assert_eq!(resolve_binding(&content.table, Some("0")), Some(Action::Back));
        assert_eq!(resolve_binding(&content.table, Some("1")), None);
        assert_eq!(resolve_binding(&content.table, Some("x")), None);
        assert_eq!(resolve_binding(&content.table, None), None);
    }
}

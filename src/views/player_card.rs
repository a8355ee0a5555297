// ============================================================================
// PLAYER CARD VIEW - Una entrada del roster en la región lista
// ============================================================================

use crate::models::Player;
use crate::views::node::{Action, ViewNode};

/// Renderizar player card: imagen, nombre, id y los dos botones enlazados
pub fn render_player_card(player: &Player) -> ViewNode {
    ViewNode::new("div")
        .class("player-card")
        .child(render_player_image(player))
        .child(ViewNode::new("h4").text(format!("Name: {}", player.name)))
        .child(ViewNode::new("p").text(format!("Player ID: {}", player.id)))
        .child(
            ViewNode::new("button")
                .class("see-details")
                .text("See Details")
                .on_click(Action::ShowDetails(player.id)),
        )
        .child(
            ViewNode::new("button")
                .class("delete-button")
                .text("Remove from Roster")
                .on_click(Action::Remove(player.id)),
        )
}

/// Compartido por lista y detalle; el alt siempre es el nombre del jugador
pub fn render_player_image(player: &Player) -> ViewNode {
    ViewNode::new("img")
        .class("player-img")
        .attr("src", &player.image_url)
        .attr("alt", &player.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    #[test]
    fn card_exposes_id_name_and_image() {
        let card = render_player_card(&Player::new(7, "Rex", "Lab", "x.png"));

        let img = card.find_tag("img").expect("img");
        assert_eq!(img.get_attr("src"), Some("x.png"));
        assert_eq!(img.get_attr("alt"), Some("Rex"));

        let text = card.text_content();
        assert!(text.contains("Name: Rex"));
        assert!(text.contains("Player ID: 7"));
        // La raza solo aparece en el detalle
        assert!(!text.contains("Lab"));
    }

    #[test]
    fn card_controls_are_bound_to_player_id() {
        let card = render_player_card(&Player::new(42, "Bo", "Pug", "bo.png"));
        assert_eq!(
            card.actions(),
            vec![Action::ShowDetails(PlayerId(42)), Action::Remove(PlayerId(42))]
        );
    }
}

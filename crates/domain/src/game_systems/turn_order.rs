//! Initiative sequencing shared by systems with a linear turn order.

use crate::entities::Combat;
use crate::value_objects::NormalizedEntry;

/// Annotate party entries with their initiative and order them by turn.
///
/// Entries are matched to the first combatant their actor controls. Entries
/// with no combatant keep their relative order after everyone who has a turn.
pub fn sequence_by_turn_order(entries: Vec<NormalizedEntry>, combat: &Combat) -> Vec<NormalizedEntry> {
    let mut keyed: Vec<(usize, NormalizedEntry)> = entries
        .into_iter()
        .map(|mut entry| match combat.turn_of(&entry.id) {
            Some((turn, combatant)) => {
                entry.initiative = combatant.initiative;
                (turn, entry)
            }
            None => (usize::MAX, entry),
        })
        .collect();

    // stable: ties keep input order
    keyed.sort_by_key(|(turn, _)| *turn);
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Combatant;
    use crate::value_objects::Bar;

    fn entry(id: &str) -> NormalizedEntry {
        NormalizedEntry::new(id, id, Bar::zero("HP"))
    }

    fn ids(entries: &[NormalizedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn orders_by_turn_and_annotates_initiative() {
        let combat = Combat::new("c1")
            .with_combatant(Combatant::new("k1").with_actor("c").with_initiative(21.0))
            .with_combatant(Combatant::new("k2").with_actor("a").with_initiative(15.0))
            .with_combatant(Combatant::new("k3").with_actor("b").with_initiative(9.0));

        let ordered = sequence_by_turn_order(vec![entry("a"), entry("b"), entry("c")], &combat);
        assert_eq!(ids(&ordered), vec!["c", "a", "b"]);
        assert_eq!(ordered[0].initiative, Some(21.0));
        assert_eq!(ordered[2].initiative, Some(9.0));
    }

    #[test]
    fn entries_without_combatant_trail_in_input_order() {
        let combat = Combat::new("c1").with_combatant(Combatant::new("k1").with_actor("b"));

        let ordered =
            sequence_by_turn_order(vec![entry("x"), entry("b"), entry("y")], &combat);
        assert_eq!(ids(&ordered), vec!["b", "x", "y"]);
        assert_eq!(ordered[1].initiative, None);
    }

    #[test]
    fn unrolled_combatant_keeps_no_initiative() {
        let combat = Combat::new("c1").with_combatant(Combatant::new("k1").with_actor("a"));
        let ordered = sequence_by_turn_order(vec![entry("a")], &combat);
        assert_eq!(ordered[0].initiative, None);
    }
}

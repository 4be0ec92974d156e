//! Property tests for the schema store.

use formsmith_fields::{Archetype, FieldUpdate, Schema, SchemaEvent};
use proptest::prelude::*;

fn archetype() -> impl Strategy<Value = Archetype> {
    prop::sample::select(Archetype::ALL.to_vec())
}

proptest! {
    /// Property: ids stay pairwise distinct for any sequence of adds.
    #[test]
    fn added_ids_are_unique(archetypes in prop::collection::vec(archetype(), 0..64)) {
        let mut schema = Schema::new();
        for a in &archetypes {
            schema.add(*a);
        }
        let mut ids: Vec<_> = schema.iter().map(|f| f.id.clone()).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), archetypes.len());
    }

    /// Property: checkboxes start optional, everything else starts required.
    #[test]
    fn default_required_policy(a in archetype()) {
        let mut schema = Schema::new();
        let (id, _) = schema.add(a);
        let field = schema.get(id.as_str()).unwrap();
        prop_assert_eq!(field.required, a != Archetype::Checkbox);
        prop_assert_eq!(field.options().is_empty(), !a.is_choice());
    }

    /// Property: deleting any field keeps the remaining order intact.
    #[test]
    fn delete_keeps_relative_order(
        archetypes in prop::collection::vec(archetype(), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut schema = Schema::new();
        for a in &archetypes {
            schema.add(*a);
        }
        let before: Vec<_> = schema.iter().map(|f| f.id.clone()).collect();
        let victim = before[pick.index(before.len())].clone();

        let events = schema.delete(victim.as_str());
        prop_assert_eq!(events, vec![SchemaEvent::FieldRemoved { id: victim.clone() }]);

        let expected: Vec<_> = before.into_iter().filter(|id| *id != victim).collect();
        let after: Vec<_> = schema.iter().map(|f| f.id.clone()).collect();
        prop_assert_eq!(after, expected);
        for (i, f) in schema.iter().enumerate() {
            prop_assert_eq!(schema.position(f.id.as_str()), Some(i));
        }
    }

    /// Property: option index edits never panic and never touch other fields.
    #[test]
    fn option_edits_are_total(index in 0usize..8, from in 0usize..8, to in 0usize..8) {
        let mut schema = Schema::new();
        let text = schema.add(Archetype::Text).0;
        let select = schema.add(Archetype::Select).0;
        let text_before = schema.get(text.as_str()).unwrap().clone();

        schema.set_option_at(select.as_str(), index, "X");
        schema.move_option(select.as_str(), from, to);
        schema.remove_option_at(select.as_str(), index);
        schema.update(text.as_str(), FieldUpdate::Options(vec!["nope".into()]));

        prop_assert_eq!(schema.get(text.as_str()).unwrap(), &text_before);
        prop_assert!(schema.get(select.as_str()).unwrap().options().len() <= 2);
    }
}

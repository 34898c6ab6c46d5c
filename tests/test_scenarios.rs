use rebuttal::{
    aa::{AAFramework, Semantics},
    analysis::{AttackValidator, AttackVerdict, ResidualStrengthEvaluator, StrengthPolicyKind},
    solvers::{SemanticsEngine, SemanticsExtensions},
    utils::Label,
};
use strum::IntoEnumIterator;

fn labels(af: &AAFramework<&'static str>, extensions: &SemanticsExtensions) -> Vec<Vec<&'static str>> {
    extensions.extensions().iter().map(|e| e.labels(af)).collect()
}

#[test]
fn test_empty_graph() {
    let af = AAFramework::<&'static str>::default();
    let engine = SemanticsEngine::new(&af);
    for semantics in Semantics::iter() {
        assert_eq!(
            vec![Vec::<&str>::new()],
            labels(&af, &engine.compute(semantics).unwrap()),
            "{}",
            semantics
        );
    }
}

#[test]
fn test_single_self_attacker() {
    let af = AAFramework::new_with_labels_and_attacks(&["a"], &[("a", "a")]).unwrap();
    let engine = SemanticsEngine::new(&af);
    let empty = vec![Vec::<&str>::new()];
    assert_eq!(empty, labels(&af, &engine.compute(Semantics::GR).unwrap()));
    assert_eq!(empty, labels(&af, &engine.compute(Semantics::PR).unwrap()));
    assert!(engine.compute(Semantics::ST).unwrap().is_empty());
}

#[test]
fn test_simple_attack_chain() {
    let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
    let engine = SemanticsEngine::new(&af);
    assert_eq!(vec![vec!["a"]], labels(&af, &engine.compute(Semantics::GR).unwrap()));
    let labelling = engine.grounded_labelling().unwrap();
    assert_eq!(Label::In, labelling.label_of_argument(&af, &"a").unwrap());
    assert_eq!(Label::Out, labelling.label_of_argument(&af, &"b").unwrap());
    let validation = AttackValidator::new(&af).unwrap().validate(&"a", &"b");
    assert_eq!(AttackVerdict::Redundant, validation.verdict());
}

#[test]
fn test_odd_cycle() {
    let af = AAFramework::new_with_labels_and_attacks(
        &["a", "b", "c"],
        &[("a", "b"), ("b", "c"), ("c", "a")],
    )
    .unwrap();
    let engine = SemanticsEngine::new(&af);
    assert!(engine.compute(Semantics::ST).unwrap().is_empty());
    assert_eq!(
        vec![Vec::<&str>::new()],
        labels(&af, &engine.compute(Semantics::GR).unwrap())
    );
    let labelling = engine.grounded_labelling().unwrap();
    assert!(labelling.iter().all(|l| l == Label::Undec));
    for kind in StrengthPolicyKind::iter().filter(|k| *k != StrengthPolicyKind::CompleteBlend) {
        let evaluator = ResidualStrengthEvaluator::default().with_policy_kind(kind);
        for arg in ["a", "b", "c"] {
            assert_eq!(0.5, evaluator.evaluate_argument(&af, &arg).unwrap().score());
        }
    }
}

#[test]
fn test_defended_argument() {
    let af = AAFramework::new_with_labels_and_attacks(
        &["a", "b", "c"],
        &[("b", "a"), ("c", "b")],
    )
    .unwrap();
    let engine = SemanticsEngine::new(&af);
    assert_eq!(
        vec![vec!["a", "c"]],
        labels(&af, &engine.compute(Semantics::GR).unwrap())
    );
    let validation = AttackValidator::new(&af).unwrap().validate(&"b", &"a");
    assert_eq!(AttackVerdict::Redundant, validation.verdict());
    assert_eq!(Some(Label::In), validation.target_label_after());
    let strength = ResidualStrengthEvaluator::default()
        .evaluate(&validation)
        .unwrap();
    assert_eq!(1.0, strength.score());
}

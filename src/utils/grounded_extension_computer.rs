use super::{ArgSet, Label, Labelling};
use crate::aa::{AAFramework, LabelType};

/// Computes the grounded labelling of an AF.
///
/// Unattacked arguments are labelled IN, the arguments they attack OUT,
/// and an argument becomes IN as soon as all its attackers are OUT.
/// The remaining arguments are UNDEC.
/// The IN arguments form the least fixpoint of the characteristic function.
pub fn grounded_labelling<T>(af: &AAFramework<T>) -> Labelling
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut labels = vec![Label::Undec; n];
    let mut in_args = Vec::with_capacity(n);
    let mut n_processed_args = 0;
    let mut remaining_attackers = (0..n)
        .map(|i| {
            let attackers = af.attackers_of(i).len();
            if attackers == 0 {
                labels[i] = Label::In;
                in_args.push(i);
            }
            attackers
        })
        .collect::<Vec<usize>>();
    while n_processed_args < in_args.len() {
        let id = in_args[n_processed_args];
        for defeated in af.attacked_by(id) {
            if labels[*defeated] == Label::Out {
                continue;
            }
            labels[*defeated] = Label::Out;
            for attacked in af.attacked_by(*defeated) {
                remaining_attackers[*attacked] -= 1;
                if remaining_attackers[*attacked] == 0 && labels[*attacked] == Label::Undec {
                    labels[*attacked] = Label::In;
                    in_args.push(*attacked);
                }
            }
        }
        n_processed_args += 1;
    }
    Labelling::new(labels)
}

/// Computes the grounded extension of an AF.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> ArgSet
where
    T: LabelType,
{
    grounded_labelling(af).in_set()
}

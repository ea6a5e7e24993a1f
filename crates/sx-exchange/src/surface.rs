//! Ion-exchange surfaces: which species is the bare exchanger, and how many
//! exchanger equivalents each of the others consumes.

use sx_core::ensure_amount;
use sx_species::{AggregateState, Formula, Species, SpeciesList};
use tracing::{debug, warn};

use crate::equivalents::ExchangerSite;
use crate::error::{ExchangeError, ExchangeResult};
use crate::options::ExchangeOptions;

/// The species of one ion-exchange surface, classified once at construction.
///
/// `ze()[i]` is the number of exchanger equivalents of species `i`. Exactly
/// one species has zero equivalents; that one is the exchanger, and every
/// other position is listed in `indices_exchange()` in input order.
/// A species with nonzero net charge counts 0 equivalents, which is how
/// the bare exchanger (`X-`) is told apart from `NaX`, `CaX2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IonExchangeSurface {
    exchanger_symbol: String,
    ze: Vec<u32>,
    index_exchanger: usize,
    indices_exchange: Vec<usize>,
}

impl IonExchangeSurface {
    /// Build from species already restricted to the ion-exchange state.
    pub fn new(species: &[Species], options: &ExchangeOptions) -> ExchangeResult<Self> {
        let formulas = species
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.parsed_formula()
                    .map_err(|source| ExchangeError::Formula { index, source })
            })
            .collect::<ExchangeResult<Vec<_>>>()?;
        Self::from_parsed(&formulas, options)
    }

    /// Build straight from formula strings, e.g. `["X-", "NaX", "CaX2"]`.
    pub fn from_formulas<S: AsRef<str>>(
        formulas: &[S],
        options: &ExchangeOptions,
    ) -> ExchangeResult<Self> {
        let formulas = formulas
            .iter()
            .enumerate()
            .map(|(index, f)| {
                Formula::parse(f.as_ref()).map_err(|source| ExchangeError::Formula { index, source })
            })
            .collect::<ExchangeResult<Vec<_>>>()?;
        Self::from_parsed(&formulas, options)
    }

    /// Build from the ion-exchange species of a wider list. Indices in the
    /// result refer to positions among those species only.
    pub fn from_species_list(list: &SpeciesList, options: &ExchangeOptions) -> ExchangeResult<Self> {
        let exchange = list.with_aggregate_state(AggregateState::IonExchange);
        Self::new(exchange.as_slice(), options)
    }

    fn from_parsed(formulas: &[Formula], options: &ExchangeOptions) -> ExchangeResult<Self> {
        let site = match options.exchanger_symbol() {
            Some(symbol) => ExchangerSite::new(symbol),
            None => ExchangerSite::infer(formulas).inspect_err(|err| {
                warn!(species = formulas.len(), error = %err, "exchanger site inference failed");
            })?,
        };

        let ze: Vec<u32> = formulas.iter().map(|f| site.equivalents(f)).collect();

        let zeros: Vec<usize> = ze
            .iter()
            .enumerate()
            .filter(|&(_, &z)| z == 0)
            .map(|(i, _)| i)
            .collect();
        let [index_exchanger] = zeros.as_slice() else {
            warn!(
                symbol = site.symbol(),
                zeros = ?zeros,
                "ion-exchange surface needs exactly one exchanger species"
            );
            return Err(ExchangeError::NoExchangerFound { positions: zeros });
        };
        let index_exchanger = *index_exchanger;

        let indices_exchange: Vec<usize> =
            (0..ze.len()).filter(|&i| i != index_exchanger).collect();

        debug!(
            species = ze.len(),
            symbol = site.symbol(),
            exchanger = index_exchanger,
            "built ion-exchange surface"
        );

        Ok(Self {
            exchanger_symbol: site.symbol().to_string(),
            ze,
            index_exchanger,
            indices_exchange,
        })
    }

    /// Exchanger equivalents per species, in input order.
    pub fn ze(&self) -> &[u32] {
        &self.ze
    }

    pub fn index_exchanger(&self) -> usize {
        self.index_exchanger
    }

    pub fn indices_exchange(&self) -> &[usize] {
        &self.indices_exchange
    }

    pub fn exchanger_symbol(&self) -> &str {
        &self.exchanger_symbol
    }

    pub fn species_count(&self) -> usize {
        self.ze.len()
    }

    /// Equivalent fractions `beta_i = ze_i x_i / sum_j ze_j x_j`.
    ///
    /// `x` holds one amount (moles or mole fraction) per species. The
    /// exchanger always gets 0.
    pub fn equivalent_fractions(&self, x: &[f64]) -> ExchangeResult<Vec<f64>> {
        if x.len() != self.ze.len() {
            return Err(ExchangeError::LengthMismatch {
                expected: self.ze.len(),
                actual: x.len(),
            });
        }

        let weighted = x
            .iter()
            .zip(&self.ze)
            .enumerate()
            .map(|(index, (&xi, &z))| {
                ensure_amount(xi, "species amount")
                    .map(|xi| f64::from(z) * xi)
                    .map_err(|source| ExchangeError::InvalidAmount { index, source })
            })
            .collect::<ExchangeResult<Vec<f64>>>()?;

        let total: f64 = weighted.iter().sum();
        if total <= 0.0 {
            return Err(ExchangeError::ZeroEquivalents);
        }
        Ok(weighted.into_iter().map(|w| w / total).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sx_core::{Tolerances, nearly_equal};
    use sx_species::FormulaError;

    fn x_options() -> ExchangeOptions {
        ExchangeOptions::new().with_exchanger_symbol("X")
    }

    #[test]
    fn classifies_exchanger_and_exchange_species() {
        let surface =
            IonExchangeSurface::from_formulas(&["X-", "AlOHX2", "AlX3", "KX", "NaX"], &x_options())
                .unwrap();

        assert_eq!(surface.ze(), &[0, 2, 3, 1, 1]);
        assert_eq!(surface.index_exchanger(), 0);
        assert_eq!(surface.indices_exchange(), &[1, 2, 3, 4]);
        assert_eq!(surface.exchanger_symbol(), "X");
        assert_eq!(surface.species_count(), 5);
    }

    #[test]
    fn exchanger_need_not_come_first() {
        let surface =
            IonExchangeSurface::from_formulas(&["NaX", "CaX2", "X-"], &ExchangeOptions::new())
                .unwrap();
        assert_eq!(surface.index_exchanger(), 2);
        assert_eq!(surface.indices_exchange(), &[0, 1]);
        assert_eq!(surface.exchanger_symbol(), "X");
    }

    #[test]
    fn two_exchangers_are_rejected() {
        let err = IonExchangeSurface::from_formulas(&["X-", "X-", "NaX"], &x_options()).unwrap_err();
        assert_eq!(
            err,
            ExchangeError::NoExchangerFound {
                positions: vec![0, 1]
            }
        );
    }

    #[test]
    fn missing_exchanger_is_rejected() {
        let err = IonExchangeSurface::from_formulas(&["NaX", "CaX2"], &x_options()).unwrap_err();
        assert_eq!(err, ExchangeError::NoExchangerFound { positions: vec![] });
    }

    #[test]
    fn malformed_formula_reports_index() {
        let err = IonExchangeSurface::from_formulas(&["X-", "Na$"], &x_options()).unwrap_err();
        match err {
            ExchangeError::Formula { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(
                    source,
                    FormulaError::UnexpectedChar { pos: 2, ch: '$', .. }
                ));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn summed_site_count_past_u32_is_a_formula_error() {
        let err = IonExchangeSurface::from_formulas(&["X-", "X4294967295X"], &x_options())
            .unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::Formula {
                index: 1,
                source: FormulaError::CountOverflow { .. }
            }
        ));
    }

    #[test]
    fn explicit_charge_marks_exchanger() {
        let species = [Species::new("X").with_charge(-1), Species::new("NaX")];
        let surface = IonExchangeSurface::new(&species, &x_options()).unwrap();
        assert_eq!(surface.ze(), &[0, 1]);
    }

    #[test]
    fn species_list_is_filtered_to_ion_exchange() {
        let list = SpeciesList::from_formulas("Na+ X-(ex) Ca++ NaX(ex) CaX2(ex)");
        let surface = IonExchangeSurface::from_species_list(&list, &x_options()).unwrap();
        assert_eq!(surface.ze(), &[0, 1, 2]);
        assert_eq!(surface.index_exchanger(), 0);
    }

    #[test]
    fn equivalent_fractions_weight_by_ze() {
        let surface =
            IonExchangeSurface::from_formulas(&["X-", "NaX", "CaX2"], &x_options()).unwrap();
        let beta = surface.equivalent_fractions(&[0.5, 0.2, 0.4]).unwrap();

        let tol = Tolerances::default();
        assert_eq!(beta[0], 0.0);
        assert!(nearly_equal(beta[1], 0.2, tol));
        assert!(nearly_equal(beta[2], 0.8, tol));
    }

    #[test]
    fn equivalent_fractions_validate_input() {
        let surface =
            IonExchangeSurface::from_formulas(&["X-", "NaX", "CaX2"], &x_options()).unwrap();

        assert_eq!(
            surface.equivalent_fractions(&[1.0]).unwrap_err(),
            ExchangeError::LengthMismatch {
                expected: 3,
                actual: 1
            }
        );
        assert!(matches!(
            surface.equivalent_fractions(&[0.0, -1.0, 1.0]),
            Err(ExchangeError::InvalidAmount { index: 1, .. })
        ));
        assert!(matches!(
            surface.equivalent_fractions(&[0.0, 1.0, f64::NAN]),
            Err(ExchangeError::InvalidAmount { index: 2, .. })
        ));
        assert_eq!(
            surface.equivalent_fractions(&[1.0, 0.0, 0.0]).unwrap_err(),
            ExchangeError::ZeroEquivalents
        );
    }
}

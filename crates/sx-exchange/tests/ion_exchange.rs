//! Integration tests for sx-exchange.

use sx_core::SxError;
use sx_exchange::{ExchangeError, ExchangeOptions, IonExchangeSurface};
use sx_species::{AggregateState, Species, SpeciesList};

/// The exchange species of the PHREEQC database, bare exchanger first.
const PHREEQC_EXCHANGE: &str = "X- AlOHX2 AlX3 BaX2 CaX2 CdX2 CuX2 FeX2 KX LiX \
                                MgX2 MnX2 NH4X NaX PbX2 SrX2 ZnX2";

fn phreeqc_species() -> Vec<Species> {
    PHREEQC_EXCHANGE
        .split_whitespace()
        .map(|f| Species::new(f).with_aggregate_state(AggregateState::IonExchange))
        .collect()
}

#[test]
fn phreeqc_exchange_species() {
    let species = phreeqc_species();
    let surface = IonExchangeSurface::new(&species, &ExchangeOptions::new()).unwrap();

    assert_eq!(surface.exchanger_symbol(), "X");
    assert_eq!(
        surface.ze(),
        &[0, 2, 3, 2, 2, 2, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2, 2]
    );
    assert_eq!(surface.index_exchanger(), 0);
    assert_eq!(surface.indices_exchange(), (1..17).collect::<Vec<_>>());
}

#[test]
fn mixed_database_keeps_only_exchange_species() {
    // Aqueous and gaseous species interleaved with the exchange ones
    let mut list = SpeciesList::new();
    list.push(Species::new("Ca++"));
    for species in phreeqc_species() {
        list.push(species);
        list.push(Species::new("CO2(g)"));
    }
    list.push(Species::new("NO3-"));

    let options = ExchangeOptions::new().with_exchanger_symbol("X");
    let surface = IonExchangeSurface::from_species_list(&list, &options).unwrap();

    assert_eq!(surface.species_count(), 17);
    assert_eq!(surface.index_exchanger(), 0);
    assert_eq!(surface.ze()[12], 1); // NH4X
}

#[test]
fn surface_site_tag_as_exchanger() {
    let surface = IonExchangeSurface::from_formulas(
        &["NaHfo_w", "Hfo_w-", "CaHfo_w2"],
        &ExchangeOptions::new(),
    )
    .unwrap();

    assert_eq!(surface.exchanger_symbol(), "Hfo_w");
    assert_eq!(surface.ze(), &[1, 0, 2]);
    assert_eq!(surface.index_exchanger(), 1);
    assert_eq!(surface.indices_exchange(), &[0, 2]);
}

#[test]
fn construction_failures() {
    let options = ExchangeOptions::new().with_exchanger_symbol("X");

    let err = IonExchangeSurface::from_formulas(&["NaX", "KX"], &options).unwrap_err();
    assert!(matches!(err, ExchangeError::NoExchangerFound { ref positions } if positions.is_empty()));

    let err = IonExchangeSurface::from_formulas(&["X-", "NaX", "Ca(X2"], &options).unwrap_err();
    assert!(matches!(err, ExchangeError::Formula { index: 2, .. }));

    let err =
        IonExchangeSurface::from_formulas(&["X-", "NaY"], &ExchangeOptions::new()).unwrap_err();
    assert!(matches!(err, ExchangeError::ExchangerSiteUnresolved { .. }));

    // Every failure folds into the workspace error
    let err: SxError = err.into();
    assert!(matches!(err, SxError::Invariant { .. }));
}

#[test]
fn equivalent_fractions_sum_to_one() {
    let species = phreeqc_species();
    let surface = IonExchangeSurface::new(&species, &ExchangeOptions::new()).unwrap();

    let amounts: Vec<f64> = (0..surface.species_count()).map(|i| 0.1 * i as f64).collect();
    let beta = surface.equivalent_fractions(&amounts).unwrap();

    let total: f64 = beta.iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert_eq!(beta[surface.index_exchanger()], 0.0);
}

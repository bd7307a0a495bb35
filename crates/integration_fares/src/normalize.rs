//! Normalization of the provider-shaped price payload
//!
//! Providers are visited in declaration order. Grab expands to one offer per
//! car class, in the order the backend listed them; every other provider
//! yields exactly one offer. A payload with `k` Grab services therefore
//! always normalizes to `k + 3` offers.

use domain::{GrabFareRange, GrabOfferDetails, ProviderService, RideOffer, SurgeLevel};

use crate::error::FareServiceError;
use crate::models::{GrabService, RawPriceResponse};

/// Turn a validated price payload into the uniform offer list
///
/// # Errors
///
/// Returns `FareServiceError::ParseError` if a single-fare provider is
/// missing its estimate.
pub fn normalize_prices(mut raw: RawPriceResponse) -> Result<Vec<RideOffer>, FareServiceError> {
    let mut offers = Vec::with_capacity(raw.grab.services.len() + ProviderService::ALL.len() - 1);

    for provider in ProviderService::ALL {
        if provider.quotes_fare_range() {
            let services = std::mem::take(&mut raw.grab.services);
            offers.extend(services.into_iter().map(grab_offer));
            continue;
        }

        let fare = raw.estimated_fare(provider).ok_or_else(|| {
            FareServiceError::ParseError(format!("missing estimate for {}", provider.as_key()))
        })?;
        let offer = RideOffer::estimated(provider, fare)
            .map_err(|e| FareServiceError::ParseError(e.to_string()))?;
        offers.push(offer);
    }

    Ok(offers)
}

fn grab_offer(service: GrabService) -> RideOffer {
    let surge = SurgeLevel::from_notice(service.surge_notice.as_deref()).is_surging();

    RideOffer::grab(
        GrabFareRange {
            min_fare: service.fare.min_fare,
            max_fare: service.fare.max_fare,
            currency: service.fare.currency,
        },
        GrabOfferDetails {
            service_name: service.service_name,
            eta: service.eta,
            // ett mirrors eta; the backend's own ett field is not surfaced
            ett: service.eta,
            link: service.direct_deep_link,
            icon_link: service.icon_link,
            surge,
        },
    )
}

#[cfg(test)]
mod tests {
    use domain::Fare;

    use super::*;
    use crate::models::{RawGrabFare, RawGrabQuote};

    fn grab_service(name: &str, min: f64, surge_notice: Option<&str>) -> GrabService {
        GrabService {
            service_id: 69,
            service_name: name.to_string(),
            fare: RawGrabFare {
                currency: "SGD".to_string(),
                min_fare: min,
                max_fare: min + 3.54,
            },
            surge_notice: surge_notice.map(str::to_string),
            icon_link: format!("https://icons/{name}.png"),
            deep_link: "https://grab.onelink.me/x".to_string(),
            direct_deep_link: format!("grab://{name}"),
            eta: 6.0,
            ett: Some(4.0),
        }
    }

    fn payload(services: Vec<GrabService>) -> RawPriceResponse {
        RawPriceResponse {
            grab: RawGrabQuote { services },
            gojek: 8.13,
            metered_fare: 8.57,
            zig: 13.06,
        }
    }

    #[test]
    fn end_to_end_example() {
        let raw = payload(vec![GrabService {
            fare: RawGrabFare {
                currency: "SGD".to_string(),
                min_fare: 9.44,
                max_fare: 12.98,
            },
            surge_notice: Some("LOW_SURGE".to_string()),
            direct_deep_link: "grab://x".to_string(),
            ..grab_service("GrabCar", 0.0, None)
        }]);

        let offers = normalize_prices(raw).unwrap();
        assert_eq!(offers.len(), 4);

        let grab = &offers[0];
        assert_eq!(grab.service(), ProviderService::Grab);
        assert_eq!(
            grab.fare(),
            &Fare::Range(GrabFareRange {
                min_fare: 9.44,
                max_fare: 12.98,
                currency: "SGD".to_string(),
            })
        );
        assert_eq!(grab.eta(), Some(6.0));
        assert_eq!(grab.ett(), Some(6.0));
        assert_eq!(grab.surge(), Some(false));
        assert_eq!(grab.link(), Some("grab://x"));

        let expected = [
            (ProviderService::Gojek, 8.13),
            (ProviderService::StandardTaxi, 8.57),
            (ProviderService::Zig, 13.06),
        ];
        for (offer, (service, amount)) in offers[1..].iter().zip(expected) {
            assert_eq!(offer.service(), service);
            assert!(matches!(offer.fare(), Fare::Estimated(f) if (f.estimated_fare - amount).abs() < f64::EPSILON));
            assert!(offer.eta().is_none());
            assert!(offer.link().is_none());
        }
    }

    #[test]
    fn grab_services_keep_backend_order_at_grab_position() {
        let raw = payload(vec![
            grab_service("GrabCar 6", 11.04, None),
            grab_service("GrabCar", 9.44, None),
            grab_service("JustGrab", 8.64, None),
        ]);

        let offers = normalize_prices(raw).unwrap();
        let names: Vec<_> = offers.iter().map(RideOffer::display_name).collect();
        assert_eq!(
            names,
            vec!["GrabCar 6", "GrabCar", "JustGrab", "Gojek", "Taxi (metered)", "Zig"]
        );
    }

    #[test]
    fn no_grab_services_still_yields_three_offers() {
        let offers = normalize_prices(payload(Vec::new())).unwrap();
        let services: Vec<_> = offers.iter().map(RideOffer::service).collect();
        assert_eq!(
            services,
            vec![
                ProviderService::Gojek,
                ProviderService::StandardTaxi,
                ProviderService::Zig
            ]
        );
    }

    #[test]
    fn ett_mirrors_eta_not_raw_ett() {
        let offers = normalize_prices(payload(vec![GrabService {
            eta: 9.0,
            ett: Some(4.0),
            ..grab_service("GrabCar Premium", 11.04, None)
        }]))
        .unwrap();
        assert_eq!(offers[0].ett(), Some(9.0));
    }

    #[test]
    fn surge_derived_from_notice() {
        let offers = normalize_prices(payload(vec![
            grab_service("a", 1.0, Some("HIGH_SURGE")),
            grab_service("b", 1.0, Some("FRACTIONAL_SURGE")),
            grab_service("c", 1.0, Some("LOW_SURGE")),
            grab_service("d", 1.0, Some("NONE")),
            grab_service("e", 1.0, None),
        ]))
        .unwrap();
        let surges: Vec<_> = offers[..5].iter().map(RideOffer::surge).collect();
        assert_eq!(
            surges,
            vec![Some(true), Some(true), Some(false), Some(false), Some(false)]
        );
    }

    #[test]
    fn grab_offer_carries_icon_and_name() {
        let offers = normalize_prices(payload(vec![grab_service("JustGrab", 8.64, None)])).unwrap();
        assert_eq!(offers[0].icon_link(), Some("https://icons/JustGrab.png"));
        assert_eq!(offers[0].service_name(), Some("JustGrab"));
    }
}

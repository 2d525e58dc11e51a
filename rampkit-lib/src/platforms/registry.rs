//! Platform Registry
//!
//! One immutable [`PlatformConfig`] per [`PaymentPlatform`] variant, built
//! once and shared read-only afterwards. Lookup by variant cannot fail;
//! lookup by identifier string fails with [`RampkitError::UnknownPlatform`].

use super::cashapp::{self, CashAppPlugin, CashAppValidator};
use super::config::{DepositSpec, PlatformConfig};
use super::mercado_pago::{self, MercadoPagoPlugin, MercadoPagoValidator};
use super::revolut::{self, RevolutPlugin, RevolutValidator};
use super::traits::{DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters};
use super::venmo::{self, VenmoPlugin, VenmoValidator};
use super::wise::{self, WisePlugin};
use super::{PaymentPlatform, PAYMENT_PLATFORMS};
use crate::currency::Currency;
use crate::lookup::LookupClient;
use crate::Result;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Registry of every supported payment platform.
///
/// # Example
///
/// ```ignore
/// use rampkit_lib::platforms::{PaymentPlatform, PlatformRegistry};
///
/// let registry = PlatformRegistry::with_defaults()?;
/// let wise = registry.get(PaymentPlatform::Wise);
/// assert_eq!(wise.formatted_send_link("bob", None, None), "https://wise.com/pay/me/bob");
/// ```
#[derive(Debug)]
pub struct PlatformRegistry {
    configs: [PlatformConfig; PAYMENT_PLATFORMS.len()],
    client: Arc<LookupClient>,
}

impl PlatformRegistry {
    /// Builds the registry. Validators that need the network share `client`.
    pub fn new(client: Arc<LookupClient>) -> Self {
        let configs = [
            venmo_config(&client),
            cashapp_config(&client),
            revolut_config(&client),
            wise_config(),
            mercado_pago_config(),
        ];
        Self { configs, client }
    }

    /// Registry with a lookup client configured from the environment.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(Arc::new(LookupClient::from_env()?)))
    }

    /// The shared lookup client.
    pub fn lookup_client(&self) -> &Arc<LookupClient> {
        &self.client
    }

    /// Gets the configuration for a platform.
    pub fn get(&self, platform: PaymentPlatform) -> &PlatformConfig {
        &self.configs[platform.index()]
    }

    /// Gets the configuration for a published platform identifier.
    pub fn get_by_id(&self, id: &str) -> Result<&PlatformConfig> {
        Ok(self.get(id.parse()?))
    }

    /// Iterates configurations in published order.
    pub fn iter(&self) -> impl Iterator<Item = &PlatformConfig> {
        self.configs.iter()
    }

    /// Returns all platform identifiers in published order.
    pub fn list_platforms(&self) -> Vec<PaymentPlatform> {
        self.configs.iter().map(|c| c.platform).collect()
    }

    /// Platforms on which `currency` can be sent.
    pub fn platforms_supporting(&self, currency: Currency) -> Vec<&PlatformConfig> {
        self.configs
            .iter()
            .filter(|c| c.supports_currency(currency))
            .collect()
    }

    /// Parses a proof context produced on `platform`.
    pub fn parse_proof(
        &self,
        platform: PaymentPlatform,
        context: &str,
    ) -> Result<ProofExtractedParameters> {
        let result = self.get(platform).parse_extracted_parameters(context);
        #[cfg(feature = "tracing")]
        if let Err(e) = &result {
            tracing::debug!(platform = %platform, error = %e, "proof context rejected");
        }
        result
    }

    /// Resolves the canonical payee identifier for a deposit on `platform`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, deposit)))]
    pub async fn validate_deposit(
        &self,
        platform: PaymentPlatform,
        deposit: &DepositData,
    ) -> Result<String> {
        self.get(platform).resolve_payee_id(deposit).await
    }
}

fn deposit_spec(
    plugin: &dyn PlatformPlugin,
    placeholder: &'static str,
    helper_text: &'static str,
    failure_message: &'static str,
    validator: Option<Arc<dyn DepositValidator>>,
) -> DepositSpec {
    DepositSpec {
        payee_detail_input_placeholder: placeholder,
        payee_detail_input_helper_text: helper_text,
        payee_detail_validation_failure_message: failure_message,
        payee_id_key: plugin.payee_id_key(),
        validator,
    }
}

fn venmo_config(client: &Arc<LookupClient>) -> PlatformConfig {
    PlatformConfig {
        platform: PaymentPlatform::Venmo,
        platform_name: "Venmo",
        platform_currencies: venmo::CURRENCIES,
        auth_link: "https://account.venmo.com/?feed=mine",
        min_fiat_amount: Decimal::new(1, 1),
        locale_time_string: "en-US",
        num_payments_fetched: 10,
        use_custom_qr_code: true,
        supports_appclip: false,
        show_appclip_on_web: false,
        deposit_requires_approval: false,
        supports_sending_payment_on_web: true,
        min_extension_version: "0.1.6",
        deposit: deposit_spec(
            &VenmoPlugin,
            "Enter your Venmo username",
            "This is your Venmo username",
            "Make sure there are no typos in your username. Do not include the @",
            Some(Arc::new(VenmoValidator::new(Arc::clone(client)))),
        ),
        plugin: Arc::new(VenmoPlugin),
    }
}

fn cashapp_config(client: &Arc<LookupClient>) -> PlatformConfig {
    PlatformConfig {
        platform: PaymentPlatform::CashApp,
        platform_name: "Cash App",
        platform_currencies: cashapp::CURRENCIES,
        auth_link: "https://cash.app/account/activity",
        min_fiat_amount: Decimal::new(1, 1),
        locale_time_string: "en-US",
        num_payments_fetched: 15,
        use_custom_qr_code: false,
        supports_appclip: false,
        show_appclip_on_web: false,
        deposit_requires_approval: false,
        supports_sending_payment_on_web: false,
        min_extension_version: "0.1.6",
        deposit: deposit_spec(
            &CashAppPlugin,
            "Enter your Cashtag",
            "This is your Cashtag. Please ensure you have set your Cashtag as discoverable by others. Do not include the $ symbol.",
            "Make sure you have set your Cashtag as discoverable by others. Do not include the $ symbol.",
            Some(Arc::new(CashAppValidator::new(Arc::clone(client)))),
        ),
        plugin: Arc::new(CashAppPlugin),
    }
}

fn revolut_config(client: &Arc<LookupClient>) -> PlatformConfig {
    PlatformConfig {
        platform: PaymentPlatform::Revolut,
        platform_name: "Revolut",
        platform_currencies: revolut::CURRENCIES,
        auth_link: "https://app.revolut.com/home",
        min_fiat_amount: Decimal::new(1, 1),
        locale_time_string: "en-US",
        num_payments_fetched: 20,
        use_custom_qr_code: true,
        supports_appclip: true,
        show_appclip_on_web: true,
        deposit_requires_approval: false,
        supports_sending_payment_on_web: false,
        min_extension_version: "0.1.9",
        deposit: deposit_spec(
            &RevolutPlugin,
            "Enter your Revtag",
            "This is your Revtag. Make sure you have set your Revtag to be publicly discoverable.",
            "Make sure you have set your Revtag to be publicly discoverable and there are no typos.",
            Some(Arc::new(RevolutValidator::new(Arc::clone(client)))),
        ),
        plugin: Arc::new(RevolutPlugin),
    }
}

fn wise_config() -> PlatformConfig {
    PlatformConfig {
        platform: PaymentPlatform::Wise,
        platform_name: "Wise",
        platform_currencies: wise::CURRENCIES,
        auth_link: "https://wise.com/all-transactions?direction=OUTGOING",
        min_fiat_amount: Decimal::new(1, 1),
        locale_time_string: "en-US",
        num_payments_fetched: 20,
        use_custom_qr_code: true,
        supports_appclip: false,
        show_appclip_on_web: false,
        deposit_requires_approval: true,
        supports_sending_payment_on_web: true,
        min_extension_version: "0.1.6",
        deposit: deposit_spec(
            &WisePlugin,
            "Enter your Wisetag",
            "This is your Wisetag. Do not include the @ symbol.",
            "Make sure there are no typos. Do not include the @ symbol.",
            None,
        ),
        plugin: Arc::new(WisePlugin),
    }
}

fn mercado_pago_config() -> PlatformConfig {
    PlatformConfig {
        platform: PaymentPlatform::MercadoPago,
        platform_name: "Mercado Pago",
        platform_currencies: mercado_pago::CURRENCIES,
        auth_link: "https://www.mercadopago.com.ar/home",
        min_fiat_amount: Decimal::ONE,
        locale_time_string: "es-AR",
        num_payments_fetched: 20,
        use_custom_qr_code: true,
        supports_appclip: true,
        show_appclip_on_web: true,
        deposit_requires_approval: false,
        supports_sending_payment_on_web: true,
        min_extension_version: "0.1.10",
        deposit: deposit_spec(
            &MercadoPagoPlugin,
            "Enter your Mercado Pago CVU",
            "This is your Mercado Pago CVU. You can find it in your Mercado Pago account.",
            "Make sure there are no typos.",
            Some(Arc::new(MercadoPagoValidator)),
        ),
        plugin: Arc::new(MercadoPagoPlugin),
    }
}

/// Global registry instance for convenience.
///
/// Initialized on first use with [`PlatformRegistry::with_defaults`]. For
/// custom lookup settings, build your own [`PlatformRegistry`].
pub mod global {
    use super::*;
    use std::sync::OnceLock;

    static GLOBAL_REGISTRY: OnceLock<PlatformRegistry> = OnceLock::new();

    /// Gets the global registry, initializing it if necessary.
    pub fn registry() -> Result<&'static PlatformRegistry> {
        if let Some(registry) = GLOBAL_REGISTRY.get() {
            return Ok(registry);
        }
        let registry = PlatformRegistry::with_defaults()?;
        Ok(GLOBAL_REGISTRY.get_or_init(|| registry))
    }

    /// Gets a platform configuration from the global registry.
    pub fn get(platform: PaymentPlatform) -> Result<&'static PlatformConfig> {
        Ok(registry()?.get(platform))
    }

    /// Lists all platforms in the global registry.
    pub fn list_platforms() -> Result<Vec<PaymentPlatform>> {
        Ok(registry()?.list_platforms())
    }

    /// Parses a proof context with the global registry.
    pub fn parse_proof(platform: PaymentPlatform, context: &str) -> Result<ProofExtractedParameters> {
        registry()?.parse_proof(platform, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupConfig;
    use crate::RampkitError;

    fn registry() -> PlatformRegistry {
        PlatformRegistry::new(Arc::new(LookupClient::new(LookupConfig::new()).unwrap()))
    }

    #[test]
    fn test_one_entry_per_platform() {
        let registry = registry();
        assert_eq!(registry.list_platforms(), PAYMENT_PLATFORMS.to_vec());
        for platform in PAYMENT_PLATFORMS {
            let config = registry.get(platform);
            assert_eq!(config.platform, platform);
            assert_eq!(config.plugin().platform(), platform);
            if let Some(validator) = config.validator() {
                assert_eq!(validator.platform(), platform);
            }
        }
    }

    #[test]
    fn test_get_by_id() {
        let registry = registry();
        assert_eq!(
            registry.get_by_id("mercado_pago").unwrap().platform_name,
            "Mercado Pago"
        );
        assert!(matches!(
            registry.get_by_id("mercadopago"),
            Err(RampkitError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_payee_keys() {
        let registry = registry();
        let keys: Vec<&str> = registry.iter().map(|c| c.deposit.payee_id_key).collect();
        assert_eq!(
            keys,
            vec!["venmoUsername", "cashtag", "revolutUsername", "wisetag", "cvu"]
        );
    }

    #[test]
    fn test_only_wise_lacks_validator() {
        let registry = registry();
        let without: Vec<PaymentPlatform> = registry
            .iter()
            .filter(|c| c.validator().is_none())
            .map(|c| c.platform)
            .collect();
        assert_eq!(without, vec![PaymentPlatform::Wise]);
    }

    #[test]
    fn test_platforms_supporting() {
        let registry = registry();
        let ars: Vec<PaymentPlatform> = registry
            .platforms_supporting(Currency::Ars)
            .iter()
            .map(|c| c.platform)
            .collect();
        assert_eq!(ars, vec![PaymentPlatform::MercadoPago]);

        let usd = registry.platforms_supporting(Currency::Usd);
        assert_eq!(usd.len(), 4);
    }

    #[test]
    fn test_minimum_amounts() {
        let registry = registry();
        assert_eq!(
            registry.get(PaymentPlatform::Venmo).min_fiat_amount.to_string(),
            "0.1"
        );
        assert_eq!(
            registry
                .get(PaymentPlatform::MercadoPago)
                .min_fiat_amount
                .to_string(),
            "1"
        );
    }

    #[tokio::test]
    async fn test_wise_resolves_raw_value() {
        let registry = registry();
        let data = registry
            .get(PaymentPlatform::Wise)
            .deposit_data("bobw", None);
        assert_eq!(
            registry
                .validate_deposit(PaymentPlatform::Wise, &data)
                .await
                .unwrap(),
            "bobw"
        );
    }
}

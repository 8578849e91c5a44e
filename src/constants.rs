//! # Constants
//!
//! Default values for configuration and well-known GitHub key material.

/// Base URL for the GitHub REST API (overridable for GitHub Enterprise hosts)
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Page size for the member and GPG key listing calls
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Namespace the ArgoCD installation lives in
pub const DEFAULT_ARGOCD_NAMESPACE: &str = "argocd";

/// ConfigMap ArgoCD reads trusted GPG key material from
pub const DEFAULT_CONFIGMAP_NAME: &str = "argocd-gpg-keys-cm";

/// AppProject whose signature key list is replaced each run
pub const DEFAULT_PROJECT_NAME: &str = "default";

/// User-Agent sent on every GitHub API request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("argocd-gpg-sync/", env!("CARGO_PKG_VERSION"));

/// Key ID of GitHub's `web-flow` commit signing key
///
/// Commits created through the GitHub web UI (merges, suggested changes) are
/// signed with this key, so it has to be trusted alongside member keys for
/// signature verification to pass on squash-merged commits.
pub const WEB_FLOW_KEY_ID: &str = "4AEE18F83AFDEB23";

/// Public key block for [`WEB_FLOW_KEY_ID`], as exported by GitHub
pub const WEB_FLOW_PUBLIC_KEY: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----

xsBNBFmUaEEBCACzXTDt6ZnyaVtueZASBzgnAmK13q9Urgch+sKYeIhdymjuMQta
x15OklctmrZtqre5kwPUosG3/B2/ikuPYElcHgGPL4uL5Em6S5C/oozfkYzhwRrT
SQzvYjsE4I34To4UdE9KA97wrQjGoz2Bx72WDLyWwctD3DKQtYeHXswXXtXwKfjQ
7Fy4+Bf5IPh76dA8NJ6UtjjLIDlKqdxLW4atHe6xWFaJ+XdLUtsAroZcXBeWDCPa
buXCDscJcLJRKZVc62gOZXXtPfoHqvUPp3nuLA4YjH9bphbrMWMf810Wxz9JTd3v
yWgGqNY0zbBqeZoGv+TuExlRHT8ASGFS9SVDABEBAAHNNUdpdEh1YiAod2ViLWZs
b3cgY29tbWl0IHNpZ25pbmcpIDxub3JlcGx5QGdpdGh1Yi5jb20+wsBiBBMBCAAW
BQJZlGhBCRBK7hj4Ov3rIwIbAwIZAQAAmQEIACATWFmi2oxlBh3wAsySNCNV4IPf
DDMeh6j80WT7cgoX7V7xqJOxrfrqPEthQ3hgHIm7b5MPQlUr2q+UPL22t/I+ESF6
9b0QWLFSMJbMSk+BXkvSjH9q8jAO0986/pShPV5DU2sMxnx4LfLfHNhTzjXKokws
+8ptJ8uhMNIDXfXuzkZHIxoXk3rNcjDN5c5X+sK8UBRH092BIJWCOfaQt7v7wig5
4Ra28pM9GbHKXVNxmdLpCFyzvyMuCmINYYADsC848QQFFwnd4EQnupo6QvhEVx1O
j7wDwvuH5dCrLuLwtwXaQh0onG4583p0LGms2Mf5F+Ick6o/4peOlBoZz48=
=HXDP
-----END PGP PUBLIC KEY BLOCK-----";

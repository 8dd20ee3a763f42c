//! Static legal pages carried from the site.

pub(super) const TERMS_MD: &str = "\
Last updated: March 3, 2025

Welcome to Ask Me Bot! By using our service, you agree to the following terms.

## 1. Acceptance of Terms

By accessing this application, you agree to be bound by these Terms of Use.

## 2. Usage Restrictions

You agree not to misuse this application in any way.

## 3. Changes to Terms

We reserve the right to modify these terms at any time.
";

pub(super) const PRIVACY_MD: &str = "\
Last updated: March 3, 2025

## 1. Information We Collect

Questions you submit are forwarded to the inference service to produce an
answer. This application stores no chat history; the transcript lives only
for the current session.

## 2. How We Use Information

Submitted questions are used only to generate a response and to improve
answer quality.

## 3. Third-Party Services

Answers are generated by an external inference service; its own privacy
policy applies to data it processes.

## 4. Contact

Questions about this policy can be sent through the About page.
";

/// SDL describing every registered root field.
pub const SCHEMA_SDL: &str = r#"
  type AuthTokens {
    accessToken: String!
    refreshToken: String
  }

  type Club {
    id: ID!
    name: String!
  }

  type BookingStatus {
    status: String!
  }

  type HoldStatus {
    status: String!
    holdExpiresAt: String!
  }

  type SectionAvailability {
    availableSpots: Int!
    heldSpots: Int!
    confirmedSpots: Int!
    availabilityVersion: Int!
  }

  type AnalyticsOverview {
    occupancyRate: Float!
    approvalRate: Float!
    revenue: Float!
  }

  type AvailabilityEvent {
    event: String!
    availabilityVersion: Int!
  }

  type Query {
    club(clubId: ID!): Club
    analyticsOverview(clubId: ID!): AnalyticsOverview!
    sectionAvailability(clubId: ID!, sectionId: ID!): SectionAvailability!
  }

  type Mutation {
    login(email: String!, password: String!): AuthTokens!
    refreshSession(refreshToken: String!): AuthTokens!
    requestPasswordReset(email: String!): Boolean!
    addEmployeeMembership(clubId: ID!, userId: ID!, role: String!): Boolean!
    createAvailabilityHold(clubId: ID!, sectionId: ID!, partySize: Int!): HoldStatus!
    requestBooking(clubId: ID!, timeSlotId: ID!, partySize: Int!): BookingStatus!
    approveBooking(clubId: ID!, bookingId: ID!): BookingStatus!
  }

  type Subscription {
    availabilityUpdated(clubId: ID!, sectionId: ID!): AvailabilityEvent!
  }
"#;

/// Returns the body of `type <kind> { ... }` in [`SCHEMA_SDL`].
pub fn root_type_body(kind: &str) -> Option<&'static str> {
    let header = format!("type {kind} {{");
    let start = SCHEMA_SDL.find(&header)? + header.len();
    let end = SCHEMA_SDL[start..].find('}')?;
    Some(&SCHEMA_SDL[start..start + end])
}

use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum DietPlans {
    Table,
    Id,
    ClientId,
    Name,
    Content,
    Goal,
    CaloriesTotal,
    CreatedAt,
    DurationDays,
    ExpiresAt,
}
